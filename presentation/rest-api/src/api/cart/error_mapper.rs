use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_parts, pagination_message};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::ProductsEmpty => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.products_empty",
            ),
            CartError::UserIdEmpty => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.user_id_empty",
            ),
            CartError::TotalTooLarge => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.total_too_large",
            ),
            CartError::InvalidPagination(err) => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                pagination_message(err),
            ),
            CartError::ProductNotFound(_) => error_parts(
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.product_not_found",
            ),
            CartError::NotFound => {
                error_parts(StatusCode::NOT_FOUND, "NotFound", "cart.not_found")
            }
            CartError::ConcurrentModification => error_parts(
                StatusCode::CONFLICT,
                "ConflictError",
                "cart.concurrent_modification",
            ),
            CartError::Repository(_) => error_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
