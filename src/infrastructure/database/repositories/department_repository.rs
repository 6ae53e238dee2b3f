//! SeaORM statements for the department catalog

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};
use tracing::info;

use super::catalog_repository::SeaOrmCatalog;
use crate::domain::{Department, DepartmentCatalog, NewDepartment};
use crate::infrastructure::database::entities::department;

fn department_model_to_domain(model: department::Model) -> Department {
    Department {
        id: model.id,
        name: model.name,
        description: model.description,
        created_at: model.created_at,
    }
}

#[async_trait]
impl SeaOrmCatalog for DepartmentCatalog {
    async fn fetch(db: &DatabaseConnection, _filter: ()) -> Result<Vec<Department>, DbErr> {
        let models = department::Entity::find()
            .order_by_asc(department::Column::Name)
            .all(db)
            .await?;
        Ok(models.into_iter().map(department_model_to_domain).collect())
    }

    async fn insert(
        db: &DatabaseConnection,
        draft: NewDepartment,
        now: DateTime<Utc>,
    ) -> Result<Department, DbErr> {
        let model = department::ActiveModel {
            id: NotSet,
            name: Set(draft.name.unwrap_or_default()),
            description: Set(draft.description),
            created_at: Set(now),
        };
        let saved = model.insert(db).await?;
        info!("Department created: {} ({})", saved.name, saved.id);
        Ok(department_model_to_domain(saved))
    }
}
