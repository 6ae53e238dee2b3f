//! Domain layer: entities, creation drafts, errors and repository ports

pub mod booking_account;
pub mod catalog;
pub mod department;
pub mod error;
pub mod project;
pub mod repositories;
pub mod user;

pub use booking_account::{
    BookingAccount, BookingAccountCatalog, BookingAccountFilter, BookingAccountListing,
    NewBookingAccount,
};
pub use catalog::{validation_message, Catalog, CatalogMessages, CatalogRepository};
pub use department::{Department, DepartmentCatalog, NewDepartment};
pub use error::{DomainError, DomainResult};
pub use project::{NewProject, Project, ProjectCatalog, ProjectFilter, ProjectListing};
pub use repositories::RepositoryProvider;
pub use user::{NewUser, User, UserCatalog};
