//! Booking account DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    BookingAccount, BookingAccountFilter, BookingAccountListing, NewBookingAccount,
};
use crate::interfaces::http::common::empty_string_as_none;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingAccountDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub project_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<BookingAccount> for BookingAccountDto {
    fn from(a: BookingAccount) -> Self {
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            project_id: a.project_id,
            created_at: a.created_at,
        }
    }
}

/// Booking account as listed, annotated with project and department
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingAccountListingDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub project_id: i32,
    pub project_name: Option<String>,
    pub customer_name: Option<String>,
    pub department_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingAccountListing> for BookingAccountListingDto {
    fn from(l: BookingAccountListing) -> Self {
        let a = l.account;
        Self {
            id: a.id,
            name: a.name,
            description: a.description,
            project_id: a.project_id,
            project_name: l.project_name,
            customer_name: l.customer_name,
            department_name: l.department_name,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingAccountRequest {
    #[schema(example = "Scrum Meetings")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = 1)]
    pub project_id: Option<i32>,
}

impl From<CreateBookingAccountRequest> for NewBookingAccount {
    fn from(r: CreateBookingAccountRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            project_id: r.project_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBookingAccountsParams {
    /// Only accounts of this project
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub project_id: Option<i32>,
}

impl From<ListBookingAccountsParams> for BookingAccountFilter {
    fn from(p: ListBookingAccountsParams) -> Self {
        Self {
            project_id: p.project_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingAccountsResponse {
    pub booking_accounts: Vec<BookingAccountListingDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingAccountResponse {
    pub booking_account: BookingAccountDto,
}
