//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Read the API key from the `x-api-key` header
//! 2. Compare it against the key configured at startup
//! 3. Forward matching requests to the next handler
//! 4. Reject everything else with HTTP 401
//!
//! When no key is configured the service runs in disabled-auth mode and
//! every request is forwarded.

use std::sync::Arc;

use crate::{config::Config, error::AppError};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Header carrying the caller's API key. Header names are case-insensitive.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reason returned to callers whose key is missing or wrong.
pub const INVALID_KEY_REASON: &str = "Invalid or missing API key";

/// Result of checking one request against the configured key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The request may proceed to the next handler.
    Allowed,

    /// The request must be answered with 401 and the given reason.
    Rejected(&'static str),
}

/// Request authorizer holding the expected API key.
///
/// Built once from [`Config`] and shared with the middleware through axum
/// state. Cloning is cheap and the key never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyAuth {
    /// `None` means disabled-auth mode.
    expected: Option<Arc<str>>,
}

impl ApiKeyAuth {
    /// Create an authorizer. An empty key is the same as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            expected: api_key.filter(|k| !k.is_empty()).map(Arc::from),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone())
    }

    /// Whether requests are actually checked.
    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }

    /// Emit the insecure-mode warning. Called once at startup.
    pub fn warn_if_disabled(&self) {
        if !self.is_enabled() {
            tracing::warn!("WARNING: No API key configured. Running in insecure mode.");
        }
    }

    /// Decide whether a request with these headers may proceed.
    ///
    /// The comparison is a plain, case-sensitive equality on the raw header
    /// value. Values that are not visible ASCII count as missing.
    pub fn authorize(&self, headers: &HeaderMap) -> AuthOutcome {
        let Some(expected) = self.expected.as_deref() else {
            tracing::debug!("no API key configured, request allowed without authentication");
            return AuthOutcome::Allowed;
        };

        let provided = headers
            .get(API_KEY_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|k| !k.is_empty());

        match provided {
            Some(key) if key == expected => AuthOutcome::Allowed,
            _ => AuthOutcome::Rejected(INVALID_KEY_REASON),
        }
    }
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Run [`ApiKeyAuth::authorize`] over the request headers
/// 2. If allowed: call the next handler, writing nothing itself
/// 3. If rejected: return 401 Unauthorized
///
/// # Headers
///
/// ```text
/// x-api-key: abc123
/// ```
///
/// # Returns
///
/// - `Ok(Response)` from the next handler when the request is allowed
/// - `Err(AppError::Unauthorized)` when the key is missing or wrong (401)
pub async fn api_key_middleware(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match auth.authorize(request.headers()) {
        AuthOutcome::Allowed => Ok(next.run(request).await),
        AuthOutcome::Rejected(reason) => {
            tracing::debug!(path = %request.uri().path(), "rejected request: {}", reason);
            Err(AppError::Unauthorized(reason.to_string()))
        }
    }
}
