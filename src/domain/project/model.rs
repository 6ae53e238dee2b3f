//! Project domain model

use chrono::{DateTime, Utc};
use validator::Validate;

/// Customer project owned by a department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub customer_name: String,
    pub description: Option<String>,
    pub department_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Project row as listed, with the owning department's name joined in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListing {
    pub project: Project,
    /// `None` when the LEFT JOIN finds no department
    pub department_name: Option<String>,
}

/// Restricts a project listing to one department
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub department_id: Option<i32>,
}

impl ProjectFilter {
    pub fn department(department_id: i32) -> Self {
        Self {
            department_id: Some(department_id),
        }
    }
}

/// Payload for creating a project.
///
/// A non-positive `department_id` is treated as absent.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewProject {
    #[validate(
        required(message = "Name, customer name, and department ID are required"),
        length(min = 1, message = "Name, customer name, and department ID are required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Name, customer name, and department ID are required"),
        length(min = 1, message = "Name, customer name, and department ID are required")
    )]
    pub customer_name: Option<String>,
    pub description: Option<String>,
    #[validate(
        required(message = "Name, customer name, and department ID are required"),
        range(min = 1, message = "Name, customer name, and department ID are required")
    )]
    pub department_id: Option<i32>,
}

impl NewProject {
    pub fn new(
        name: impl Into<String>,
        customer_name: impl Into<String>,
        description: Option<String>,
        department_id: i32,
    ) -> Self {
        Self {
            name: Some(name.into()),
            customer_name: Some(customer_name.into()),
            description,
            department_id: Some(department_id),
        }
    }
}
