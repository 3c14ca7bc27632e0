use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct AddProductsToCartParams {
    pub user_id: UserId,
    pub product_ids: Vec<Uuid>,
}

#[async_trait]
pub trait AddProductsToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddProductsToCartParams) -> Result<Cart, CartError>;
}
