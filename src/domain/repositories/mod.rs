//! Repository access for the domain layer
//!
//! `RepositoryProvider` hands out one catalog repository per entity.
//! Consumers request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let departments = repos.departments().list(()).await?;
//!     let projects = repos.projects().list(ProjectFilter::department(1)).await?;
//! }
//! ```

use super::booking_account::BookingAccountCatalog;
use super::department::DepartmentCatalog;
use super::project::ProjectCatalog;
use super::user::UserCatalog;
use super::CatalogRepository;

pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn CatalogRepository<UserCatalog>;
    fn departments(&self) -> &dyn CatalogRepository<DepartmentCatalog>;
    fn projects(&self) -> &dyn CatalogRepository<ProjectCatalog>;
    fn booking_accounts(&self) -> &dyn CatalogRepository<BookingAccountCatalog>;
}
