use chrono::{DateTime, Utc};
use poem_openapi::{Object, Union};
use uuid::Uuid;

use business::domain::cart::model::Cart;

use crate::api::decimal::to_number;

/// Body shared by the add and remove endpoints.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartMutationRequest {
    /// Owner of the cart
    pub user_id: String,
    /// Product ids to add or remove; duplicates count once per occurrence
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub user_id: String,
    /// Product ids in insertion order
    pub product_ids: Vec<Uuid>,
    /// Sum of the prices captured when each line was added
    pub total_amount: f64,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total_amount: to_number(&cart.total_amount),
            user_id: cart.user_id.to_string(),
            product_ids: cart.product_ids,
            version: cart.version,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

/// Informational reply for removals that leave no cart to return.
#[derive(Debug, Clone, Object)]
pub struct NoticeResponse {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Clone, Union)]
#[oai(one_of)]
pub enum RemoveProductsBody {
    Cart(CartResponse),
    Notice(NoticeResponse),
}
