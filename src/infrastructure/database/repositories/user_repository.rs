//! SeaORM statements for the user catalog

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};
use tracing::info;

use super::catalog_repository::SeaOrmCatalog;
use crate::domain::{NewUser, User, UserCatalog};
use crate::infrastructure::database::entities::user;

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        role: model.role,
        department: model.department,
        created_at: model.created_at,
    }
}

#[async_trait]
impl SeaOrmCatalog for UserCatalog {
    async fn fetch(db: &DatabaseConnection, _filter: ()) -> Result<Vec<User>, DbErr> {
        let models = user::Entity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            .all(db)
            .await?;
        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn insert(
        db: &DatabaseConnection,
        draft: NewUser,
        now: DateTime<Utc>,
    ) -> Result<User, DbErr> {
        let model = user::ActiveModel {
            id: NotSet,
            name: Set(draft.name.unwrap_or_default()),
            email: Set(draft.email.unwrap_or_default()),
            role: Set(draft.role.unwrap_or_default()),
            department: Set(draft.department.unwrap_or_default()),
            created_at: Set(now),
        };
        let saved = model.insert(db).await?;
        info!("User created: {} ({})", saved.email, saved.id);
        Ok(user_model_to_domain(saved))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, NewUser, RepositoryProvider};
    use crate::infrastructure::database::memory_database;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn repos() -> SeaOrmRepositoryProvider {
        SeaOrmRepositoryProvider::new(memory_database().await)
    }

    #[tokio::test]
    async fn create_returns_submitted_fields_with_id() {
        let repos = repos().await;
        let user = repos
            .users()
            .create(NewUser::new("John Doe", "john.doe@example.com", "developer", "engineering"))
            .await
            .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john.doe@example.com");
        assert_eq!(user.role, "developer");
        assert_eq!(user.department, "engineering");
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_without_inserting() {
        let repos = repos().await;
        repos
            .users()
            .create(NewUser::new("Jane Smith", "jane@example.com", "designer", "design"))
            .await
            .unwrap();

        let err = repos
            .users()
            .create(NewUser::new("Jane Twin", "jane@example.com", "tester", "qa"))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Conflict("Email already exists".into()));
        assert_eq!(repos.users().list(()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_field_is_a_validation_error() {
        let repos = repos().await;
        let draft = NewUser {
            department: None,
            ..NewUser::new("Mike", "mike@example.com", "manager", "")
        };

        let err = repos.users().create(draft).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(
                "All fields (name, email, role, department) are required".into()
            )
        );
        assert!(repos.users().list(()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repos = repos().await;
        for (name, email) in [("A", "a@example.com"), ("B", "b@example.com"), ("C", "c@example.com")] {
            repos
                .users()
                .create(NewUser::new(name, email, "developer", "engineering"))
                .await
                .unwrap();
        }

        let names: Vec<String> = repos
            .users()
            .list(())
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }
}
