use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

/// Monetary values are stored with two decimal places.
pub const MONEY_SCALE: i64 = 2;

/// Converts a stored amount to a JSON number.
pub fn to_number(amount: &BigDecimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Converts a JSON number into a decimal rounded to cents. `None` for NaN or infinities.
pub fn from_number(value: f64) -> Option<BigDecimal> {
    BigDecimal::from_f64(value).map(|amount| amount.round(MONEY_SCALE))
}
