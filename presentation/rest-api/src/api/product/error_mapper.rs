use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_parts, pagination_message};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::NameEmpty => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::NegativePrice => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative",
            ),
            ProductError::PriceTooLarge => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_too_large",
            ),
            ProductError::InvalidPagination(err) => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                pagination_message(err),
            ),
            ProductError::NotFound => {
                error_parts(StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ProductError::Repository(_) => error_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_oversized_price_to_bad_request() {
        let (status, json) = ProductError::PriceTooLarge.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "product.price_too_large");
    }

    #[test]
    fn should_map_missing_product_to_not_found() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.status, 404);
    }
}
