//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use filedeck_core::error::{AppError, ErrorKind};

/// Standard API error response body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ApiErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>` so the `?` operator converts any
/// domain error on the way out; the mapping to a status code and body
/// lives here and nowhere else.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, body) = match err.kind {
            // Every authentication failure gets the identical body so the
            // response never reveals which part of a credential was wrong.
            ErrorKind::Authentication => {
                tracing::debug!(reason = %err.message, "Unauthorized request");
                (StatusCode::UNAUTHORIZED, ApiErrorBody::new("Unauthorized"))
            }
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, ApiErrorBody::new(err.message)),
            // The original surface reports conflicts as plain 400s.
            ErrorKind::Conflict => (StatusCode::BAD_REQUEST, ApiErrorBody::new(err.message)),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, ApiErrorBody::new("Not found")),
            ErrorKind::ServiceUnavailable | ErrorKind::Database | ErrorKind::Cache => {
                tracing::error!(kind = %err.kind, error = %err.message, "Backing store failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiErrorBody::new("Service unavailable"),
                )
            }
            _ => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody::new("Internal Server Error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
