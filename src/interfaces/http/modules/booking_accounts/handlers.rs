//! Booking account API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    BookingAccountDto, BookingAccountListingDto, BookingAccountResponse, BookingAccountsResponse,
    CreateBookingAccountRequest, ListBookingAccountsParams,
};
use crate::interfaces::http::common::{ApiError, ApiJson, ApiQuery, ErrorResponse};
use crate::interfaces::http::modules::CatalogState;

#[utoipa::path(
    get,
    path = "/api/booking-accounts",
    tag = "Booking Accounts",
    params(ListBookingAccountsParams),
    responses(
        (status = 200, description = "Booking accounts with project and department names", body = BookingAccountsResponse),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_booking_accounts(
    State(state): State<CatalogState>,
    ApiQuery(params): ApiQuery<ListBookingAccountsParams>,
) -> Result<Json<BookingAccountsResponse>, ApiError> {
    let accounts = state.repos.booking_accounts().list(params.into()).await?;
    Ok(Json(BookingAccountsResponse {
        booking_accounts: accounts
            .into_iter()
            .map(BookingAccountListingDto::from)
            .collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/booking-accounts",
    tag = "Booking Accounts",
    request_body = CreateBookingAccountRequest,
    responses(
        (status = 201, description = "Booking account created", body = BookingAccountResponse),
        (status = 400, description = "Missing required fields or invalid project ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_booking_account(
    State(state): State<CatalogState>,
    ApiJson(request): ApiJson<CreateBookingAccountRequest>,
) -> Result<(StatusCode, Json<BookingAccountResponse>), ApiError> {
    let account = state.repos.booking_accounts().create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingAccountResponse {
            booking_account: BookingAccountDto::from(account),
        }),
    ))
}
