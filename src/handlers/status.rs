//! Service status endpoint, served behind the API key middleware.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// `GET /api/v1/status`
///
/// Requires a valid `x-api-key` header unless authentication is disabled.
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
