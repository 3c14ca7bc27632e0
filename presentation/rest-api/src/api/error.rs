use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::pagination::PaginationError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    pub name: String,
    /// Code-style identifier, e.g. `cart.not_found`
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, name: &str, message: &str) -> Self {
        Self {
            status: status.as_u16(),
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn validation(message: &str) -> Json<Self> {
        Json(Self::new(StatusCode::BAD_REQUEST, "ValidationError", message))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub(crate) fn error_parts(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse::new(status, name, message)))
}

pub(crate) fn pagination_message(err: &PaginationError) -> &'static str {
    match err {
        PaginationError::InvalidPage => "pagination.invalid_page",
        PaginationError::InvalidLimit => "pagination.invalid_limit",
    }
}
