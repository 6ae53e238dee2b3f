//! Booking account domain model

use chrono::{DateTime, Utc};
use validator::Validate;

/// Named allocation bucket under a project that time is logged against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingAccount {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub project_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Booking account as listed, annotated with its project and the
/// project's department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingAccountListing {
    pub account: BookingAccount,
    pub project_name: Option<String>,
    pub customer_name: Option<String>,
    pub department_name: Option<String>,
}

/// Restricts a booking account listing to one project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingAccountFilter {
    pub project_id: Option<i32>,
}

impl BookingAccountFilter {
    pub fn project(project_id: i32) -> Self {
        Self {
            project_id: Some(project_id),
        }
    }
}

/// Payload for creating a booking account
#[derive(Debug, Clone, Default, Validate)]
pub struct NewBookingAccount {
    #[validate(
        required(message = "Name and project ID are required"),
        length(min = 1, message = "Name and project ID are required")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(
        required(message = "Name and project ID are required"),
        range(min = 1, message = "Name and project ID are required")
    )]
    pub project_id: Option<i32>,
}

impl NewBookingAccount {
    pub fn new(name: impl Into<String>, description: Option<String>, project_id: i32) -> Self {
        Self {
            name: Some(name.into()),
            description,
            project_id: Some(project_id),
        }
    }
}
