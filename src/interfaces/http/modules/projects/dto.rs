//! Project DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{NewProject, Project, ProjectFilter, ProjectListing};
use crate::interfaces::http::common::empty_string_as_none;

/// Project as created: raw columns only
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub customer_name: String,
    pub description: Option<String>,
    pub department_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            customer_name: p.customer_name,
            description: p.description,
            department_id: p.department_id,
            created_at: p.created_at,
        }
    }
}

/// Project as listed, with the department name joined in
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectListingDto {
    pub id: i32,
    pub name: String,
    pub customer_name: String,
    pub description: Option<String>,
    pub department_id: i32,
    pub department_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectListing> for ProjectListingDto {
    fn from(l: ProjectListing) -> Self {
        let p = l.project;
        Self {
            id: p.id,
            name: p.name,
            customer_name: p.customer_name,
            description: p.description,
            department_id: p.department_id,
            department_name: l.department_name,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(example = "BMW Connected Car Platform")]
    pub name: Option<String>,
    #[schema(example = "BMW AG")]
    pub customer_name: Option<String>,
    pub description: Option<String>,
    #[schema(example = 1)]
    pub department_id: Option<i32>,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(r: CreateProjectRequest) -> Self {
        Self {
            name: r.name,
            customer_name: r.customer_name,
            description: r.description,
            department_id: r.department_id,
        }
    }
}

/// List projects query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProjectsParams {
    /// Only projects of this department
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub department_id: Option<i32>,
}

impl From<ListProjectsParams> for ProjectFilter {
    fn from(p: ListProjectsParams) -> Self {
        Self {
            department_id: p.department_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectListingDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub project: ProjectDto,
}
