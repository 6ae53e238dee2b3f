//! SeaORM repository implementations

pub mod booking_account_repository;
pub mod catalog_repository;
pub mod department_repository;
pub mod project_repository;
pub mod repository_provider;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
