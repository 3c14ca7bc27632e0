use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct UpdateUserParams {
    pub id: UserId,
    pub full_name: String,
    pub address: String,
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, UserError>;
}
