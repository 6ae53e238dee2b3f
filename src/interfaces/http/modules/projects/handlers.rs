//! Project API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreateProjectRequest, ListProjectsParams, ProjectDto, ProjectListingDto, ProjectResponse,
    ProjectsResponse,
};
use crate::interfaces::http::common::{ApiError, ApiJson, ApiQuery, ErrorResponse};
use crate::interfaces::http::modules::CatalogState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    params(ListProjectsParams),
    responses(
        (status = 200, description = "Projects, newest first", body = ProjectsResponse),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_projects(
    State(state): State<CatalogState>,
    ApiQuery(params): ApiQuery<ListProjectsParams>,
) -> Result<Json<ProjectsResponse>, ApiError> {
    let projects = state.repos.projects().list(params.into()).await?;
    Ok(Json(ProjectsResponse {
        projects: projects.into_iter().map(ProjectListingDto::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Missing required fields or invalid department ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_project(
    State(state): State<CatalogState>,
    ApiJson(request): ApiJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let project = state.repos.projects().create(request.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: ProjectDto::from(project),
        }),
    ))
}
