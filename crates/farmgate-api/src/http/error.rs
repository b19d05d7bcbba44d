//! Request error type mapping storage failures to the envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use farmgate_types::error::RepositoryError;

/// Per-request error. Renders as an HTTP 500 failure envelope carrying the
/// store's error text; nothing here ever terminates the process.
#[derive(Debug)]
pub struct ApiError(pub RepositoryError);

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self.0);

        let body = json!({
            "success": false,
            "error": self.0.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
