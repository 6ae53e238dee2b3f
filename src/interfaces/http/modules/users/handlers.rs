//! User API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateUserRequest, UserDto, UserResponse, UsersResponse};
use crate::interfaces::http::common::{ApiError, ApiJson, ErrorResponse};
use crate::interfaces::http::modules::CatalogState;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, newest first", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<CatalogState>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.repos.users().list(()).await?;
    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<CatalogState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.repos.users().create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserDto::from(user),
        }),
    ))
}
