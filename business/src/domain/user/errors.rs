#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.full_name_empty")]
    FullNameEmpty,
    #[error("user.not_found")]
    NotFound,
    #[error("pagination.invalid")]
    InvalidPagination(#[from] crate::domain::shared::pagination::PaginationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
