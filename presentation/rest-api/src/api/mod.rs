pub mod cart;
pub mod decimal;
pub mod error;
pub mod health;
pub mod product;
pub mod tags;
pub mod user;
