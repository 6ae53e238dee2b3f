//! Create booking_accounts table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_projects::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookingAccounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BookingAccounts::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BookingAccounts::Description).text())
                    .col(
                        ColumnDef::new(BookingAccounts::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_accounts_project")
                            .from(BookingAccounts::Table, BookingAccounts::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_accounts_project_id")
                    .table(BookingAccounts::Table)
                    .col(BookingAccounts::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingAccounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BookingAccounts {
    Table,
    Id,
    Name,
    Description,
    ProjectId,
    CreatedAt,
}
