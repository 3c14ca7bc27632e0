#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    NegativePrice,
    #[error("product.price_too_large")]
    PriceTooLarge,
    #[error("product.not_found")]
    NotFound,
    #[error("pagination.invalid")]
    InvalidPagination(#[from] crate::domain::shared::pagination::PaginationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
