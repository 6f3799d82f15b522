//! API Key Gateway - Main Application Entry Point
//!
//! A small REST service whose `/api/v1` routes are guarded by a shared API
//! key sent in the `x-api-key` header.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Authentication**: static API key from the `API_KEY` environment variable
//! - **Format**: JSON responses
//!
//! Leaving `API_KEY` unset or empty disables authentication; a warning is
//! logged at startup.

mod app;
mod config;
mod error;
mod handlers;
mod middleware;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    app::run().await
}
