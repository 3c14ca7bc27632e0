use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Pagination;

pub struct GetAllCartsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCartsUseCase for GetAllCartsUseCaseImpl {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError> {
        let pagination = Pagination::new(params.page, params.limit)?;
        self.logger.info(&format!(
            "Listing carts (page {}, limit {})",
            pagination.page(),
            pagination.limit()
        ));

        let carts = self.repository.get_all(&pagination).await?;
        self.logger
            .info(&format!("Retrieved {} carts", carts.len()));
        Ok(carts)
    }
}
