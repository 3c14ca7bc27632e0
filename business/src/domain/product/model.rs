use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Signed;
use uuid::Uuid;

use super::errors::ProductError;

/// Largest price the store can hold (`NUMERIC(12, 2)`).
pub fn max_price() -> BigDecimal {
    BigDecimal::new(999_999_999_999_i64.into(), 2)
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: BigDecimal,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::validate(&props.name, &props.price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            price: props.price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: BigDecimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            created_at,
            updated_at,
        }
    }

    /// Replaces name and price. Carts keep the prices they captured earlier.
    pub fn revise(&mut self, name: String, price: BigDecimal) -> Result<(), ProductError> {
        Self::validate(&name, &price)?;
        self.name = name;
        self.price = price;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn validate(name: &str, price: &BigDecimal) -> Result<(), ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if price.is_negative() {
            return Err(ProductError::NegativePrice);
        }
        if *price > max_price() {
            return Err(ProductError::PriceTooLarge);
        }
        Ok(())
    }
}
