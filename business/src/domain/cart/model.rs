use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// A product id together with the price it had when it was resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    pub product_id: Uuid,
    pub price: BigDecimal,
}

impl PricedProduct {
    pub fn new(product_id: Uuid, price: BigDecimal) -> Self {
        Self { product_id, price }
    }
}

/// Largest total the store can hold (`NUMERIC(14, 2)`).
pub fn max_cart_total() -> BigDecimal {
    BigDecimal::new(99_999_999_999_999_i64.into(), 2)
}

/// Sum of the captured prices, in the order given.
pub fn total_of(lines: &[PricedProduct]) -> BigDecimal {
    lines
        .iter()
        .fold(BigDecimal::zero(), |acc, line| acc + &line.price)
}

/// One user's pending purchase record.
///
/// `total_amount` is the running sum of the prices captured when each line was
/// added, minus the prices captured when lines were removed. It is never
/// recomputed from current catalog prices.
#[derive(Debug, Clone)]
pub struct Cart {
    pub user_id: UserId,
    pub product_ids: Vec<Uuid>,
    pub total_amount: BigDecimal,
    /// Version read from the store; conditional writes compare against it.
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Opens a cart holding exactly the given lines.
    pub fn open(user_id: UserId, lines: &[PricedProduct]) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            product_ids: lines.iter().map(|line| line.product_id).collect(),
            total_amount: total_of(lines),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        product_ids: Vec<Uuid>,
        total_amount: BigDecimal,
        version: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            product_ids,
            total_amount,
            version,
            created_at,
            updated_at,
        }
    }

    /// Appends the lines after the existing ones and adds their prices to the total.
    pub fn append(&mut self, lines: &[PricedProduct]) {
        self.product_ids
            .extend(lines.iter().map(|line| line.product_id));
        self.total_amount += total_of(lines);
        self.updated_at = Utc::now();
    }

    /// Position of the first occurrence of `product_id`, if any.
    pub fn position_of(&self, product_id: Uuid) -> Option<usize> {
        self.product_ids.iter().position(|id| *id == product_id)
    }

    /// Removes the line at `index` and subtracts `price` from the total.
    /// Returns the removed id, or `None` when the index is out of range.
    pub fn remove_line(&mut self, index: usize, price: &BigDecimal) -> Option<Uuid> {
        if index >= self.product_ids.len() {
            return None;
        }
        let removed = self.product_ids.remove(index);
        self.total_amount -= price;
        self.updated_at = Utc::now();
        Some(removed)
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}
