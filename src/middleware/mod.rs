//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request
//! (e.g. reject an unauthorized caller) before it reaches the handler.

/// API key authentication middleware
pub mod auth;
