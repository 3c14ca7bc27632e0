use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct GetAllCartsParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[async_trait]
pub trait GetAllCartsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError>;
}
