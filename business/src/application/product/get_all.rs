use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::Pagination;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let pagination = Pagination::new(params.page, params.limit)?;
        self.logger.info(&format!(
            "Fetching products (page {}, limit {})",
            pagination.page(),
            pagination.limit()
        ));
        let products = self.repository.get_all(&pagination).await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
