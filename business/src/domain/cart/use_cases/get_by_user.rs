use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct GetCartByUserParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCartByUserUseCase: Send + Sync {
    async fn execute(&self, params: GetCartByUserParams) -> Result<Cart, CartError>;
}
