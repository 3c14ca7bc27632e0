use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

/// Price lookup over the product collection.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns `RepositoryError::NotFound` for unknown products.
    async fn price_of(&self, product_id: Uuid) -> Result<BigDecimal, RepositoryError>;
}
