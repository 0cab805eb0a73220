//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the production router via [`build_app_router`] so tests exercise
//! the same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses, and drives it with
//! `tower::ServiceExt::oneshot` -- no TCP listener involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use crewdesk_api::config::ServerConfig;
use crewdesk_api::router::build_app_router;
use crewdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a POST request with a plain-text body.
pub async fn post_text(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a POST request with no body (query-parameter endpoints).
pub async fn post(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a PUT request with a plain-text body.
pub async fn put_text(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from(body.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a PUT request with no body (query-parameter endpoints).
pub async fn put(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
