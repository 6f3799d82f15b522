//! Health check endpoint for service monitoring.

use crate::middleware::auth::ApiKeyAuth;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Whether API key authentication is enforced ("enabled" or "disabled")
    pub auth: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler. Public, no API key required.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "auth": "enabled",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(auth): State<ApiKeyAuth>) -> Json<HealthResponse> {
    let mode = if auth.is_enabled() { "enabled" } else { "disabled" };

    Json(HealthResponse {
        status: "healthy".to_string(),
        auth: mode.to_string(),
        timestamp: Utc::now(),
    })
}
