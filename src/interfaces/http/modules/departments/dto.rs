//! Department DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Department, NewDepartment};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Department> for DepartmentDto {
    fn from(d: Department) -> Self {
        Self {
            id: d.id,
            name: d.name,
            description: d.description,
            created_at: d.created_at,
        }
    }
}

/// Create department request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDepartmentRequest {
    #[schema(example = "R&D")]
    pub name: Option<String>,
    #[schema(example = "Research")]
    pub description: Option<String>,
}

impl From<CreateDepartmentRequest> for NewDepartment {
    fn from(r: CreateDepartmentRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentsResponse {
    pub departments: Vec<DepartmentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentResponse {
    pub department: DepartmentDto,
}
