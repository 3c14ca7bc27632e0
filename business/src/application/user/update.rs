use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};

pub struct UpdateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserUseCase for UpdateUserUseCaseImpl {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, UserError> {
        self.logger.info(&format!("Updating user: {}", params.id));

        let mut user = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        user.change_details(params.full_name, params.address)?;
        self.repository.save(&user).await?;

        self.logger.info(&format!("User updated: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::pagination::Pagination;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self, pagination: &Pagination) -> Result<Vec<User>, RepositoryError>;
            async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_user(id: &UserId) -> User {
        let now = chrono::Utc::now();
        User::from_repository(
            id.clone(),
            "Margaret Hamilton".to_string(),
            "1 Apollo Way".to_string(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_update_user_details() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_user(id)));
        mock_repo
            .expect_save()
            .withf(|user| user.address == "2 Apollo Way")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(UpdateUserParams {
                id: UserId::new("u-1"),
                full_name: "Margaret H. Hamilton".to_string(),
                address: "2 Apollo Way".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.full_name, "Margaret H. Hamilton");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = UpdateUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateUserParams {
                id: UserId::new("ghost"),
                full_name: "Nobody".to_string(),
                address: String::new(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
