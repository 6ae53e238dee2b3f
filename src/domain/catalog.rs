//! Catalog abstraction
//!
//! Users, departments, projects and booking accounts all follow the same
//! shape: a `list` with an optional filter and a `create` that validates a
//! draft, inserts one row and maps constraint failures. A [`Catalog`]
//! describes one such entity; [`CatalogRepository`] is the storage port
//! every catalog is served through.

use std::collections::BTreeSet;

use async_trait::async_trait;
use validator::{Validate, ValidationErrors};

use super::DomainResult;

/// Messages reported by a catalog's operations.
#[derive(Debug, Clone, Copy)]
pub struct CatalogMessages {
    /// Reported when the list query fails
    pub list_failed: &'static str,
    /// Reported when the insert fails for an unclassified reason
    pub create_failed: &'static str,
    /// Reported on a unique constraint violation; `None` if the entity has no unique column
    pub conflict: Option<&'static str>,
    /// Reported on a foreign key violation; `None` if the entity has no parent
    pub invalid_reference: Option<&'static str>,
}

/// Describes one record type served by the catalog repository.
pub trait Catalog: Send + Sync + 'static {
    /// Entity name used in logs
    const NAME: &'static str;

    const MESSAGES: CatalogMessages;

    /// Row returned by `create`: the raw inserted columns
    type Record: Send + 'static;

    /// Row returned by `list`, possibly enriched with joined display columns
    type Listing: Send + 'static;

    /// Optional restriction applied by `list`
    type Filter: Default + Send + 'static;

    /// Creation payload; its validation rules define the required fields
    type Draft: Validate + Send + 'static;
}

#[async_trait]
pub trait CatalogRepository<C: Catalog>: Send + Sync {
    async fn list(&self, filter: C::Filter) -> DomainResult<Vec<C::Listing>>;

    async fn create(&self, draft: C::Draft) -> DomainResult<C::Record>;
}

/// Flatten validator output into a single message.
///
/// Every field of a draft carries the same message, so de-duplication
/// collapses a payload with several missing fields into one sentence.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let messages: BTreeSet<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        })
        .collect();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.into_iter().collect::<Vec<_>>().join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Draft {
        #[validate(
            required(message = "Name and age are required"),
            length(min = 1, message = "Name and age are required")
        )]
        name: Option<String>,
        #[validate(
            required(message = "Name and age are required"),
            range(min = 1, message = "Name and age are required")
        )]
        age: Option<i32>,
        #[validate(length(max = 3))]
        code: Option<String>,
    }

    #[test]
    fn several_missing_fields_collapse_into_one_message() {
        let draft = Draft {
            name: None,
            age: Some(0),
            code: None,
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Name and age are required");
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let draft = Draft {
            name: Some(String::new()),
            age: Some(3),
            code: None,
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Name and age are required");
    }

    #[test]
    fn rule_without_message_falls_back_to_code() {
        let draft = Draft {
            name: Some("a".into()),
            age: Some(3),
            code: Some("toolong".into()),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "length");
    }
}
