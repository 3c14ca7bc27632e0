use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::cart::shared::{
    MAX_WRITE_ATTEMPTS, ensure_total_fits, lookup_price, map_write_error,
};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, PricedProduct, total_of};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::ProductCatalog;
use crate::domain::cart::use_cases::add_products::{
    AddProductsToCartParams, AddProductsToCartUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct AddProductsToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl AddProductsToCartUseCaseImpl {
    /// Resolves prices in submission order, duplicates included.
    async fn resolve_prices(&self, product_ids: &[Uuid]) -> Result<Vec<PricedProduct>, CartError> {
        let mut lines = Vec::with_capacity(product_ids.len());
        for &product_id in product_ids {
            let price = lookup_price(self.catalog.as_ref(), product_id).await?;
            lines.push(PricedProduct::new(product_id, price));
        }
        Ok(lines)
    }

    /// Writes the merged cart and returns what was written.
    async fn write(&self, user_id: &UserId, lines: &[PricedProduct]) -> Result<Cart, CartError> {
        match self.repository.find_by_user(user_id).await? {
            None => {
                let cart = Cart::open(user_id.clone(), lines);
                ensure_total_fits(&cart)?;
                self.repository
                    .insert(&cart)
                    .await
                    .map_err(map_write_error)?;
                Ok(cart)
            }
            Some(mut cart) => {
                cart.append(lines);
                ensure_total_fits(&cart)?;
                self.repository
                    .update(&cart)
                    .await
                    .map_err(map_write_error)?;
                Ok(cart)
            }
        }
    }
}

#[async_trait]
impl AddProductsToCartUseCase for AddProductsToCartUseCaseImpl {
    async fn execute(&self, params: AddProductsToCartParams) -> Result<Cart, CartError> {
        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }
        if params.product_ids.is_empty() {
            return Err(CartError::ProductsEmpty);
        }

        self.logger.info(&format!(
            "Adding {} products to cart of user {}",
            params.product_ids.len(),
            params.user_id
        ));

        // Every lookup happens before the first write.
        let lines = self.resolve_prices(&params.product_ids).await?;
        self.logger.debug(&format!(
            "Resolved incoming total {} for user {}",
            total_of(&lines),
            params.user_id
        ));

        let mut attempt = 1;
        let written = loop {
            match self.write(&params.user_id, &lines).await {
                Ok(cart) => break cart,
                Err(CartError::ConcurrentModification) if attempt < MAX_WRITE_ATTEMPTS => {
                    self.logger.warn(&format!(
                        "Cart of user {} changed concurrently, retrying (attempt {})",
                        params.user_id, attempt
                    ));
                    attempt += 1;
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "Failed to add products to cart of user {}: {}",
                        params.user_id, err
                    ));
                    return Err(err);
                }
            }
        };

        // A concurrent removal may delete the cart before the re-read.
        let cart = match self.repository.find_by_user(&params.user_id).await? {
            Some(cart) => cart,
            None => {
                self.logger.warn(&format!(
                    "Cart of user {} was deleted right after the add, returning written state",
                    params.user_id
                ));
                written
            }
        };

        self.logger.info(&format!(
            "Cart of user {} now holds {} products",
            cart.user_id,
            cart.product_ids.len()
        ));
        Ok(cart)
    }
}
