use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_parts, pagination_message};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            UserError::FullNameEmpty => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.full_name_empty",
            ),
            UserError::InvalidPagination(err) => error_parts(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                pagination_message(err),
            ),
            UserError::NotFound => error_parts(StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            UserError::Repository(_) => error_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
