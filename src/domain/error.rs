//! Domain errors

use thiserror::Error;

/// Failures a catalog operation can report to its caller.
///
/// Every variant carries the message that ends up in the `{"error": ...}`
/// envelope, so the HTTP layer never has to invent wording of its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Required field missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Uniqueness constraint violated (duplicate email, duplicate department name)
    #[error("{0}")]
    Conflict(String),

    /// Foreign key target does not exist
    #[error("{0}")]
    InvalidReference(String),

    /// Any other storage or connectivity fault
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::InvalidReference(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
