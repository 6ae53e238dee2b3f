//! Generic SeaORM catalog repository
//!
//! One implementation of [`CatalogRepository`] shared by every entity. The
//! per-entity parts (which columns to select, which joins to apply, how to
//! build the insert) live in [`SeaOrmCatalog`] impls; validation, failure
//! classification and logging live here.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::{error, warn};
use validator::Validate;

use crate::domain::{
    validation_message, Catalog, CatalogMessages, CatalogRepository, DomainError, DomainResult,
};
use crate::infrastructure::database::constraint::{classify, StoreFailure};

/// Storage statements for one catalog.
///
/// `insert` assumes a draft that passed validation; the repository's
/// `create` is its only caller.
#[async_trait]
pub(crate) trait SeaOrmCatalog: Catalog {
    async fn fetch(
        db: &DatabaseConnection,
        filter: Self::Filter,
    ) -> Result<Vec<Self::Listing>, DbErr>;

    /// Insert an already validated draft, stamping `created_at` with `now`
    async fn insert(
        db: &DatabaseConnection,
        draft: Self::Draft,
        now: DateTime<Utc>,
    ) -> Result<Self::Record, DbErr>;
}

pub(crate) struct SeaOrmCatalogRepository<C> {
    db: DatabaseConnection,
    catalog: PhantomData<fn() -> C>,
}

impl<C> SeaOrmCatalogRepository<C> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            catalog: PhantomData,
        }
    }
}

#[async_trait]
impl<C: SeaOrmCatalog> CatalogRepository<C> for SeaOrmCatalogRepository<C> {
    async fn list(&self, filter: C::Filter) -> DomainResult<Vec<C::Listing>> {
        C::fetch(&self.db, filter).await.map_err(|e| {
            error!("Error fetching {} list: {}", C::NAME, e);
            DomainError::Internal(C::MESSAGES.list_failed.to_string())
        })
    }

    async fn create(&self, draft: C::Draft) -> DomainResult<C::Record> {
        draft
            .validate()
            .map_err(|e| DomainError::Validation(validation_message(&e)))?;

        C::insert(&self.db, draft, Utc::now()).await.map_err(|e| {
            let failure = classify(&e);
            let err = failure_to_domain(failure, &C::MESSAGES);
            match &err {
                DomainError::Internal(_) => error!("Error creating {}: {}", C::NAME, e),
                _ => warn!("Rejected {} insert ({:?}): {}", C::NAME, failure, e),
            }
            err
        })
    }
}

/// A catalog without a conflict (or reference) message has no such
/// constraint, so that class of failure is unexpected and reported as internal.
pub(crate) fn failure_to_domain(failure: StoreFailure, messages: &CatalogMessages) -> DomainError {
    match (failure, messages.conflict, messages.invalid_reference) {
        (StoreFailure::Conflict, Some(msg), _) => DomainError::Conflict(msg.to_string()),
        (StoreFailure::InvalidReference, _, Some(msg)) => {
            DomainError::InvalidReference(msg.to_string())
        }
        _ => DomainError::Internal(messages.create_failed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepartmentCatalog, NewProject, ProjectCatalog, ProjectFilter};
    use crate::infrastructure::database::memory_database;

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_store() {
        let db = memory_database().await;
        let repository = SeaOrmCatalogRepository::<ProjectCatalog>::new(db);

        let draft = NewProject {
            department_id: None,
            ..NewProject::new("Orphan", "ACME", None, 1)
        };
        let err = repository.create(draft).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("Name, customer name, and department ID are required".into())
        );

        assert!(repository
            .list(ProjectFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[test]
    fn conflict_uses_catalog_message() {
        let err = failure_to_domain(StoreFailure::Conflict, &DepartmentCatalog::MESSAGES);
        assert_eq!(
            err,
            DomainError::Conflict("Department name already exists".into())
        );
    }

    #[test]
    fn invalid_reference_uses_catalog_message() {
        let err = failure_to_domain(StoreFailure::InvalidReference, &ProjectCatalog::MESSAGES);
        assert_eq!(err, DomainError::InvalidReference("Invalid department ID".into()));
    }

    #[test]
    fn unexpected_constraint_class_is_internal() {
        let err = failure_to_domain(StoreFailure::Conflict, &ProjectCatalog::MESSAGES);
        assert_eq!(err, DomainError::Internal("Failed to create project".into()));

        let err = failure_to_domain(StoreFailure::InvalidReference, &DepartmentCatalog::MESSAGES);
        assert_eq!(err, DomainError::Internal("Failed to create department".into()));
    }

    #[test]
    fn internal_failure_is_internal() {
        let err = failure_to_domain(StoreFailure::Internal, &DepartmentCatalog::MESSAGES);
        assert_eq!(err, DomainError::Internal("Failed to create department".into()));
    }
}
