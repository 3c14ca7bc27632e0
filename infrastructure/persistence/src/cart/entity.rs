use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub user_id: String,
    pub product_ids: Vec<Uuid>,
    pub total_amount: BigDecimal,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            UserId::new(self.user_id),
            self.product_ids,
            self.total_amount,
            self.version,
            self.created_at,
            self.updated_at,
        )
    }
}
