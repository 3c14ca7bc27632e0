use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

use crate::api::decimal::to_number;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price, rounded to cents (cannot be negative)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price, rounded to cents (cannot be negative)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            price: to_number(&product.price),
            name: product.name,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
