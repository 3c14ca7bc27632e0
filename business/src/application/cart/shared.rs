use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, max_cart_total};
use crate::domain::cart::services::ProductCatalog;
use crate::domain::errors::RepositoryError;

/// Read-modify-write attempts before giving up on a contended cart.
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

pub async fn lookup_price(
    catalog: &dyn ProductCatalog,
    product_id: Uuid,
) -> Result<BigDecimal, CartError> {
    catalog.price_of(product_id).await.map_err(|e| match e {
        RepositoryError::NotFound => CartError::ProductNotFound(product_id),
        other => CartError::Repository(other),
    })
}

/// Lost conditional writes become `ConcurrentModification` so callers can retry.
pub fn map_write_error(error: RepositoryError) -> CartError {
    match error {
        RepositoryError::Conflict => CartError::ConcurrentModification,
        other => CartError::Repository(other),
    }
}

pub fn ensure_total_fits(cart: &Cart) -> Result<(), CartError> {
    if cart.total_amount > max_cart_total() {
        return Err(CartError::TotalTooLarge);
    }
    Ok(())
}
