//! SeaORM-backed repository provider

use sea_orm::DatabaseConnection;

use super::catalog_repository::SeaOrmCatalogRepository;
use crate::domain::{
    BookingAccountCatalog, CatalogRepository, DepartmentCatalog, ProjectCatalog,
    RepositoryProvider, UserCatalog,
};

/// Holds one repository per catalog, all sharing the same pool
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmCatalogRepository<UserCatalog>,
    departments: SeaOrmCatalogRepository<DepartmentCatalog>,
    projects: SeaOrmCatalogRepository<ProjectCatalog>,
    booking_accounts: SeaOrmCatalogRepository<BookingAccountCatalog>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmCatalogRepository::new(db.clone()),
            departments: SeaOrmCatalogRepository::new(db.clone()),
            projects: SeaOrmCatalogRepository::new(db.clone()),
            booking_accounts: SeaOrmCatalogRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn CatalogRepository<UserCatalog> {
        &self.users
    }

    fn departments(&self) -> &dyn CatalogRepository<DepartmentCatalog> {
        &self.departments
    }

    fn projects(&self) -> &dyn CatalogRepository<ProjectCatalog> {
        &self.projects
    }

    fn booking_accounts(&self) -> &dyn CatalogRepository<BookingAccountCatalog> {
        &self.booking_accounts
    }
}
