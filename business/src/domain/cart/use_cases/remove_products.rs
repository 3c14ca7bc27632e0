use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveProductsFromCartParams {
    pub user_id: UserId,
    pub product_ids: Vec<Uuid>,
}

/// Successful results of a removal. Only `Updated` carries a cart.
#[derive(Debug, Clone)]
pub enum RemoveProductsOutcome {
    Updated(Cart),
    /// The user has no cart.
    NothingToRemove,
    /// The last line was removed and the cart deleted.
    CartEmptied,
}

#[async_trait]
pub trait RemoveProductsFromCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RemoveProductsFromCartParams,
    ) -> Result<RemoveProductsOutcome, CartError>;
}
