//! Router assembly and server startup.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the API key authorizer (warns once if disabled)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use crate::{config::Config, handlers, middleware, middleware::auth::ApiKeyAuth};
use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

/// Load configuration, bind the listener and serve until the process exits.
pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let auth = ApiKeyAuth::from_config(&config);
    auth.warn_if_disabled();

    let app = build_router(auth);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
///
/// Routes under `/api/v1` sit behind the API key middleware; `/health` is public.
pub fn build_router(auth: ApiKeyAuth) -> Router {
    let authenticated_routes = Router::new()
        .route("/api/v1/status", get(handlers::status::service_status))
        // Only applies to routes that matched, so unknown paths still 404
        .route_layer(axum_middleware::from_fn_with_state(
            auth.clone(),
            middleware::auth::api_key_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(auth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: Router, api_key: Option<&str>) -> Response {
        let mut request = Request::builder().uri("/api/v1/status");
        if let Some(key) = api_key {
            request = request.header("x-api-key", key);
        }
        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn unauthorized_body() -> Value {
        json!({"error": "Unauthorized", "message": "Invalid or missing API key"})
    }

    #[tokio::test]
    async fn unset_key_forwards_request_without_headers() {
        let app = build_router(ApiKeyAuth::new(None));
        let response = send(app, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["service"], env!("CARGO_PKG_NAME"));
    }

    #[tokio::test]
    async fn matching_key_reaches_handler() {
        let app = build_router(ApiKeyAuth::new(Some("abc123".to_string())));
        let response = send(app, Some("abc123")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn wrong_key_gets_401() {
        let app = build_router(ApiKeyAuth::new(Some("abc123".to_string())));
        let response = send(app, Some("wrong")).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await, unauthorized_body());
    }

    #[tokio::test]
    async fn missing_key_gets_same_401() {
        let app = build_router(ApiKeyAuth::new(Some("abc123".to_string())));
        let response = send(app, None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await, unauthorized_body());
    }

    #[tokio::test]
    async fn key_is_case_sensitive_end_to_end() {
        let app = build_router(ApiKeyAuth::new(Some("Secret1".to_string())));
        let response = send(app, Some("secret1")).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn health_is_public_when_auth_enabled() {
        let app = build_router(ApiKeyAuth::new(Some("abc123".to_string())));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["auth"], "enabled");
    }

    #[tokio::test]
    async fn health_reports_disabled_auth() {
        let app = build_router(ApiKeyAuth::new(Some(String::new())));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(json_body(response).await["auth"], "disabled");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found_not_unauthorized() {
        let app = build_router(ApiKeyAuth::new(Some("abc123".to_string())));
        let response = app
            .oneshot(Request::builder().uri("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
