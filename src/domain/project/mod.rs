//! Project aggregate

pub mod model;

pub use model::{NewProject, Project, ProjectFilter, ProjectListing};

use super::{Catalog, CatalogMessages};

/// Projects belong to a department and list with its name joined in.
pub struct ProjectCatalog;

impl Catalog for ProjectCatalog {
    const NAME: &'static str = "project";

    const MESSAGES: CatalogMessages = CatalogMessages {
        list_failed: "Failed to fetch projects",
        create_failed: "Failed to create project",
        conflict: None,
        invalid_reference: Some("Invalid department ID"),
    };

    type Record = Project;
    type Listing = ProjectListing;
    type Filter = ProjectFilter;
    type Draft = NewProject;
}
