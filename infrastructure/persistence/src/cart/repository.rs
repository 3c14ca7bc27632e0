use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::pagination::Pagination;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;
use crate::db::map_sqlx_error;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Zero affected rows on a conditional write means another writer got there first.
fn expect_one_row(rows_affected: u64) -> Result<(), RepositoryError> {
    if rows_affected == 0 {
        return Err(RepositoryError::Conflict);
    }
    Ok(())
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_all(&self, pagination: &Pagination) -> Result<Vec<Cart>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartEntity>(
            "SELECT user_id, product_ids, total_amount, version, created_at, updated_at FROM carts ORDER BY total_amount DESC, user_id ASC OFFSET $1 LIMIT $2",
        )
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT user_id, product_ids, total_amount, version, created_at, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO carts (user_id, product_ids, total_amount, version, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO NOTHING"#,
        )
        .bind(cart.user_id.as_str())
        .bind(&cart.product_ids)
        .bind(&cart.total_amount)
        .bind(cart.version)
        .bind(cart.created_at)
        .bind(cart.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        expect_one_row(result.rows_affected())
    }

    async fn update(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE carts
            SET product_ids = $1, total_amount = $2, version = version + 1, updated_at = $3
            WHERE user_id = $4 AND version = $5"#,
        )
        .bind(&cart.product_ids)
        .bind(&cart.total_amount)
        .bind(cart.updated_at)
        .bind(cart.user_id.as_str())
        .bind(cart.version)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        expect_one_row(result.rows_affected())
    }

    async fn delete(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE user_id = $1 AND version = $2")
            .bind(cart.user_id.as_str())
            .bind(cart.version)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        expect_one_row(result.rows_affected())
    }
}
