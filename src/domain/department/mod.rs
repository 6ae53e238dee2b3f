//! Department aggregate

pub mod model;

pub use model::{Department, NewDepartment};

use super::{Catalog, CatalogMessages};

/// Departments are listed alphabetically; names are unique.
pub struct DepartmentCatalog;

impl Catalog for DepartmentCatalog {
    const NAME: &'static str = "department";

    const MESSAGES: CatalogMessages = CatalogMessages {
        list_failed: "Failed to fetch departments",
        create_failed: "Failed to create department",
        conflict: Some("Department name already exists"),
        invalid_reference: None,
    };

    type Record = Department;
    type Listing = Department;
    type Filter = ();
    type Draft = NewDepartment;
}
