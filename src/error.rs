//! Error types and HTTP error response handling.
//!
//! This module defines the errors a request can fail with and how they are
//! converted into HTTP responses with a status code and JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error category.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The `x-api-key` header is missing or does not match the configured key.
    ///
    /// Returns HTTP 401 Unauthorized. The String is the client-facing reason.
    #[error("{0}")]
    Unauthorized(String),
}

impl AppError {
    /// Error category reported in the `error` field of the response body.
    fn category(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "Unauthorized",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": "Unauthorized",
///   "message": "Invalid or missing API key"
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "error": self.category(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
