use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.products_empty")]
    ProductsEmpty,
    #[error("cart.user_id_empty")]
    UserIdEmpty,
    #[error("cart.product_not_found")]
    ProductNotFound(Uuid),
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.total_too_large")]
    TotalTooLarge,
    #[error("cart.concurrent_modification")]
    ConcurrentModification,
    #[error("pagination.invalid")]
    InvalidPagination(#[from] crate::domain::shared::pagination::PaginationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
