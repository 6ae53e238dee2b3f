//! Department API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateDepartmentRequest, DepartmentDto, DepartmentResponse, DepartmentsResponse};
use crate::interfaces::http::common::{ApiError, ApiJson, ErrorResponse};
use crate::interfaces::http::modules::CatalogState;

#[utoipa::path(
    get,
    path = "/api/departments",
    tag = "Departments",
    responses(
        (status = 200, description = "All departments ordered by name", body = DepartmentsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_departments(
    State(state): State<CatalogState>,
) -> Result<Json<DepartmentsResponse>, ApiError> {
    let departments = state.repos.departments().list(()).await?;
    Ok(Json(DepartmentsResponse {
        departments: departments.into_iter().map(DepartmentDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/departments",
    tag = "Departments",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 409, description = "Department name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_department(
    State(state): State<CatalogState>,
    ApiJson(request): ApiJson<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    let department = state.repos.departments().create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(DepartmentResponse {
            department: DepartmentDto::from(department),
        }),
    ))
}
