use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::Pagination;
use crate::domain::shared::value_objects::UserId;

use super::model::Cart;

/// Cart storage. Writes are conditional: `insert` fails with
/// `RepositoryError::Conflict` when a cart already exists for the user, and
/// `update`/`delete` fail with it when the stored version differs from
/// `cart.version`.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Carts ordered by total amount, highest first.
    async fn get_all(&self, pagination: &Pagination) -> Result<Vec<Cart>, RepositoryError>;
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn update(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn delete(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
