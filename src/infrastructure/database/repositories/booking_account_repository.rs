//! SeaORM statements for the booking account catalog

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use tracing::info;

use super::catalog_repository::SeaOrmCatalog;
use crate::domain::{
    BookingAccount, BookingAccountCatalog, BookingAccountFilter, BookingAccountListing,
    NewBookingAccount,
};
use crate::infrastructure::database::entities::{booking_account, department, project};

#[derive(Debug, FromQueryResult)]
struct BookingAccountRow {
    id: i32,
    name: String,
    description: Option<String>,
    project_id: i32,
    created_at: DateTime<Utc>,
    project_name: Option<String>,
    customer_name: Option<String>,
    department_name: Option<String>,
}

impl From<BookingAccountRow> for BookingAccountListing {
    fn from(row: BookingAccountRow) -> Self {
        Self {
            account: BookingAccount {
                id: row.id,
                name: row.name,
                description: row.description,
                project_id: row.project_id,
                created_at: row.created_at,
            },
            project_name: row.project_name,
            customer_name: row.customer_name,
            department_name: row.department_name,
        }
    }
}

fn booking_account_model_to_domain(model: booking_account::Model) -> BookingAccount {
    BookingAccount {
        id: model.id,
        name: model.name,
        description: model.description,
        project_id: model.project_id,
        created_at: model.created_at,
    }
}

#[async_trait]
impl SeaOrmCatalog for BookingAccountCatalog {
    async fn fetch(
        db: &DatabaseConnection,
        filter: BookingAccountFilter,
    ) -> Result<Vec<BookingAccountListing>, DbErr> {
        let mut query = booking_account::Entity::find()
            .select_only()
            .columns([
                booking_account::Column::Id,
                booking_account::Column::Name,
                booking_account::Column::Description,
                booking_account::Column::ProjectId,
                booking_account::Column::CreatedAt,
            ])
            .column_as(project::Column::Name, "project_name")
            .column_as(project::Column::CustomerName, "customer_name")
            .column_as(department::Column::Name, "department_name")
            .join(JoinType::LeftJoin, booking_account::Relation::Project.def())
            .join(JoinType::LeftJoin, project::Relation::Department.def());

        if let Some(project_id) = filter.project_id {
            query = query.filter(booking_account::Column::ProjectId.eq(project_id));
        }

        let rows = query
            .order_by_desc(booking_account::Column::CreatedAt)
            .order_by_desc(booking_account::Column::Id)
            .into_model::<BookingAccountRow>()
            .all(db)
            .await?;
        Ok(rows.into_iter().map(BookingAccountListing::from).collect())
    }

    async fn insert(
        db: &DatabaseConnection,
        draft: NewBookingAccount,
        now: DateTime<Utc>,
    ) -> Result<BookingAccount, DbErr> {
        let model = booking_account::ActiveModel {
            id: NotSet,
            name: Set(draft.name.unwrap_or_default()),
            description: Set(draft.description),
            project_id: Set(draft.project_id.unwrap_or_default()),
            created_at: Set(now),
        };
        let saved = model.insert(db).await?;
        info!(
            "Booking account created: {} on project {} ({})",
            saved.name, saved.project_id, saved.id
        );
        Ok(booking_account_model_to_domain(saved))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        BookingAccountFilter, DomainError, NewBookingAccount, NewDepartment, NewProject,
        RepositoryProvider,
    };
    use crate::infrastructure::database::memory_database;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn with_projects() -> (SeaOrmRepositoryProvider, i32, i32) {
        let repos = SeaOrmRepositoryProvider::new(memory_database().await);
        let department = repos
            .departments()
            .create(NewDepartment::new("Industry 4.0", "Smart manufacturing"))
            .await
            .unwrap();
        let siemens = repos
            .projects()
            .create(NewProject::new("Smart Factory", "Siemens AG", None, department.id))
            .await
            .unwrap();
        let bosch = repos
            .projects()
            .create(NewProject::new("Predictive Maintenance", "Bosch", None, department.id))
            .await
            .unwrap();
        (repos, siemens.id, bosch.id)
    }

    #[tokio::test]
    async fn listing_carries_project_and_department_names() {
        let (repos, siemens, _) = with_projects().await;
        let created = repos
            .booking_accounts()
            .create(NewBookingAccount::new(
                "Scrum Meetings",
                Some("Scrum Meetings activities for project".into()),
                siemens,
            ))
            .await
            .unwrap();

        let listed = repos
            .booking_accounts()
            .list(BookingAccountFilter::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].account, created);
        assert_eq!(listed[0].project_name.as_deref(), Some("Smart Factory"));
        assert_eq!(listed[0].customer_name.as_deref(), Some("Siemens AG"));
        assert_eq!(listed[0].department_name.as_deref(), Some("Industry 4.0"));
    }

    #[tokio::test]
    async fn filter_restricts_to_project() {
        let (repos, siemens, bosch) = with_projects().await;
        for (name, project) in [("A", siemens), ("B", bosch), ("C", siemens)] {
            repos
                .booking_accounts()
                .create(NewBookingAccount::new(name, None, project))
                .await
                .unwrap();
        }

        let names: Vec<String> = repos
            .booking_accounts()
            .list(BookingAccountFilter::project(siemens))
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.account.name)
            .collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[tokio::test]
    async fn unknown_project_is_an_invalid_reference() {
        let (repos, _, _) = with_projects().await;
        let err = repos
            .booking_accounts()
            .create(NewBookingAccount::new("Orphan", None, 777))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::InvalidReference("Invalid project ID".into()));
        assert!(repos
            .booking_accounts()
            .list(BookingAccountFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn same_name_is_allowed_under_one_project() {
        let (repos, siemens, _) = with_projects().await;
        for _ in 0..2 {
            repos
                .booking_accounts()
                .create(NewBookingAccount::new("Development Work", None, siemens))
                .await
                .unwrap();
        }
        let listed = repos
            .booking_accounts()
            .list(BookingAccountFilter::project(siemens))
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
    }
}
