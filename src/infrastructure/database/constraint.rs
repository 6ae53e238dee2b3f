//! Classification of storage failures
//!
//! SQLite and PostgreSQL report constraint violations with different codes
//! (`2067`/`787` vs `23505`/`23503`). SeaORM normalizes them into [`SqlErr`];
//! this module reduces that to the three outcomes the catalogs care about.

use sea_orm::{DbErr, SqlErr};

/// What a failed statement means to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFailure {
    /// A unique constraint rejected the row
    Conflict,
    /// A foreign key pointed at a missing parent row
    InvalidReference,
    /// Anything else: connectivity, syntax, other constraints
    Internal,
}

pub fn classify(err: &DbErr) -> StoreFailure {
    classify_sql_err(err.sql_err())
}

pub fn classify_sql_err(err: Option<SqlErr>) -> StoreFailure {
    match err {
        Some(SqlErr::UniqueConstraintViolation(_)) => StoreFailure::Conflict,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => StoreFailure::InvalidReference,
        _ => StoreFailure::Internal,
    }
}
