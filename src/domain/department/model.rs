//! Department domain model

use chrono::{DateTime, Utc};
use validator::Validate;

/// Organisational unit that owns projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a department
#[derive(Debug, Clone, Default, Validate)]
pub struct NewDepartment {
    #[validate(
        required(message = "Name and description are required"),
        length(min = 1, message = "Name and description are required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Name and description are required"),
        length(min = 1, message = "Name and description are required")
    )]
    pub description: Option<String>,
}

impl NewDepartment {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}
