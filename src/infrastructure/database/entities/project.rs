//! Project entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Project model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub customer_name: String,
    pub description: Option<String>,
    pub department_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Cascade"
    )]
    Department,
    #[sea_orm(has_many = "super::booking_account::Entity")]
    BookingAccounts,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::booking_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingAccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
