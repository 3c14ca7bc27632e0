//! In-memory doubles for exercising whole cart flows in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::ProductCatalog;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Pagination;
use crate::domain::shared::value_objects::UserId;

#[derive(Default)]
pub struct InMemoryCartRepository {
    carts: Mutex<HashMap<UserId, Cart>>,
    writes: Mutex<u32>,
}

impl InMemoryCartRepository {
    pub fn stored(&self, user_id: &UserId) -> Option<Cart> {
        self.carts.lock().unwrap().get(user_id).cloned()
    }

    pub fn write_count(&self) -> u32 {
        *self.writes.lock().unwrap()
    }

    fn record_write(&self) {
        *self.writes.lock().unwrap() += 1;
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get_all(&self, pagination: &Pagination) -> Result<Vec<Cart>, RepositoryError> {
        let mut carts: Vec<Cart> = self.carts.lock().unwrap().values().cloned().collect();
        carts.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        Ok(carts
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        Ok(self.stored(user_id))
    }

    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self.carts.lock().unwrap();
        if carts.contains_key(&cart.user_id) {
            return Err(RepositoryError::Conflict);
        }
        carts.insert(cart.user_id.clone(), cart.clone());
        drop(carts);
        self.record_write();
        Ok(())
    }

    async fn update(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self.carts.lock().unwrap();
        match carts.get_mut(&cart.user_id) {
            Some(stored) if stored.version == cart.version => {
                stored.product_ids = cart.product_ids.clone();
                stored.total_amount = cart.total_amount.clone();
                stored.updated_at = cart.updated_at;
                stored.version += 1;
            }
            _ => return Err(RepositoryError::Conflict),
        }
        drop(carts);
        self.record_write();
        Ok(())
    }

    async fn delete(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self.carts.lock().unwrap();
        match carts.get(&cart.user_id) {
            Some(stored) if stored.version == cart.version => {
                carts.remove(&cart.user_id);
            }
            _ => return Err(RepositoryError::Conflict),
        }
        drop(carts);
        self.record_write();
        Ok(())
    }
}

/// Catalog with fixed prices. Unknown ids are not found; `failing` ids error out.
#[derive(Default)]
pub struct FixedPriceCatalog {
    prices: HashMap<Uuid, BigDecimal>,
    failing: Vec<Uuid>,
}

impl FixedPriceCatalog {
    pub fn with_price(mut self, product_id: Uuid, price: i64) -> Self {
        self.prices.insert(product_id, BigDecimal::from(price));
        self
    }

    pub fn failing_on(mut self, product_id: Uuid) -> Self {
        self.failing.push(product_id);
        self
    }
}

#[async_trait]
impl ProductCatalog for FixedPriceCatalog {
    async fn price_of(&self, product_id: Uuid) -> Result<BigDecimal, RepositoryError> {
        if self.failing.contains(&product_id) {
            return Err(RepositoryError::DatabaseError);
        }
        self.prices
            .get(&product_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}
