//! SeaORM statements for the project catalog

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use tracing::info;

use super::catalog_repository::SeaOrmCatalog;
use crate::domain::{NewProject, Project, ProjectCatalog, ProjectFilter, ProjectListing};
use crate::infrastructure::database::entities::{department, project};

/// Project columns plus the joined department name
#[derive(Debug, FromQueryResult)]
struct ProjectRow {
    id: i32,
    name: String,
    customer_name: String,
    description: Option<String>,
    department_id: i32,
    created_at: DateTime<Utc>,
    department_name: Option<String>,
}

impl From<ProjectRow> for ProjectListing {
    fn from(row: ProjectRow) -> Self {
        Self {
            project: Project {
                id: row.id,
                name: row.name,
                customer_name: row.customer_name,
                description: row.description,
                department_id: row.department_id,
                created_at: row.created_at,
            },
            department_name: row.department_name,
        }
    }
}

fn project_model_to_domain(model: project::Model) -> Project {
    Project {
        id: model.id,
        name: model.name,
        customer_name: model.customer_name,
        description: model.description,
        department_id: model.department_id,
        created_at: model.created_at,
    }
}

#[async_trait]
impl SeaOrmCatalog for ProjectCatalog {
    async fn fetch(
        db: &DatabaseConnection,
        filter: ProjectFilter,
    ) -> Result<Vec<ProjectListing>, DbErr> {
        let mut query = project::Entity::find()
            .select_only()
            .columns([
                project::Column::Id,
                project::Column::Name,
                project::Column::CustomerName,
                project::Column::Description,
                project::Column::DepartmentId,
                project::Column::CreatedAt,
            ])
            .column_as(department::Column::Name, "department_name")
            .join(JoinType::LeftJoin, project::Relation::Department.def());

        if let Some(department_id) = filter.department_id {
            query = query.filter(project::Column::DepartmentId.eq(department_id));
        }

        let rows = query
            .order_by_desc(project::Column::CreatedAt)
            .order_by_desc(project::Column::Id)
            .into_model::<ProjectRow>()
            .all(db)
            .await?;
        Ok(rows.into_iter().map(ProjectListing::from).collect())
    }

    async fn insert(
        db: &DatabaseConnection,
        draft: NewProject,
        now: DateTime<Utc>,
    ) -> Result<Project, DbErr> {
        let model = project::ActiveModel {
            id: NotSet,
            name: Set(draft.name.unwrap_or_default()),
            customer_name: Set(draft.customer_name.unwrap_or_default()),
            description: Set(draft.description),
            department_id: Set(draft.department_id.unwrap_or_default()),
            created_at: Set(now),
        };
        let saved = model.insert(db).await?;
        info!(
            "Project created: {} for {} ({})",
            saved.name, saved.customer_name, saved.id
        );
        Ok(project_model_to_domain(saved))
    }
}
