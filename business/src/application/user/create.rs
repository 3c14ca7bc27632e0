use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::create::{CreateUserParams, CreateUserUseCase};

pub struct CreateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateUserUseCase for CreateUserUseCaseImpl {
    async fn execute(&self, params: CreateUserParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Creating user: {}", params.full_name));

        let user = User::new(params.full_name, params.address)?;
        self.repository.save(&user).await?;

        self.logger.info(&format!("User created with id: {}", user.id));
        Ok(user)
    }
}
