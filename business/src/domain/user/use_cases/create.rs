use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct CreateUserParams {
    pub full_name: String,
    pub address: String,
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, params: CreateUserParams) -> Result<User, UserError>;
}
