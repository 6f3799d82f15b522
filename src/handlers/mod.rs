//! HTTP request handlers (route handlers).
//!
//! Authentication is applied by middleware, so handlers never see
//! unauthorized requests on protected routes.

/// Public liveness endpoint
pub mod health;
/// Protected service status endpoint
pub mod status;
