use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError> {
        self.logger.info(&format!("Deleting user: {}", params.id));

        self.repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        // The user's cart, if any, is left in place.
        self.repository.delete(&params.id).await?;

        self.logger.info(&format!("User deleted: {}", params.id));
        Ok(())
    }
}
