use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};

pub struct GetUserByIdUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByIdUseCase for GetUserByIdUseCaseImpl {
    async fn execute(&self, params: GetUserByIdParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Fetching user by id: {}", params.id));

        self.repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })
    }
}
