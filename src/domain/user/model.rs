//! User domain model

use chrono::{DateTime, Utc};
use validator::Validate;

/// A person who books time. Role and department are free-text categories,
/// not references to the department table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user
#[derive(Debug, Clone, Default, Validate)]
pub struct NewUser {
    #[validate(
        required(message = "All fields (name, email, role, department) are required"),
        length(min = 1, message = "All fields (name, email, role, department) are required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "All fields (name, email, role, department) are required"),
        length(min = 1, message = "All fields (name, email, role, department) are required")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "All fields (name, email, role, department) are required"),
        length(min = 1, message = "All fields (name, email, role, department) are required")
    )]
    pub role: Option<String>,
    #[validate(
        required(message = "All fields (name, email, role, department) are required"),
        length(min = 1, message = "All fields (name, email, role, department) are required")
    )]
    pub department: Option<String>,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            role: Some(role.into()),
            department: Some(department.into()),
        }
    }
}
