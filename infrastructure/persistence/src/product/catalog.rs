use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::services::ProductCatalog;
use business::domain::errors::RepositoryError;

use crate::db::map_sqlx_error;

/// Price lookups against the `products` table.
pub struct ProductCatalogPostgres {
    pool: PgPool,
}

impl ProductCatalogPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogPostgres {
    async fn price_of(&self, product_id: Uuid) -> Result<BigDecimal, RepositoryError> {
        sqlx::query_scalar::<_, BigDecimal>("SELECT price FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)
    }
}
