#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use taskboard_api::app::{build_app, App};
use taskboard_api::config::{ExternalConfig, ServerConfig};
use taskboard_api::state::AppState;

/// Port 9 (discard) is never served locally, so connections fail fast.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// External settings that never leave the machine.
pub fn offline_external() -> ExternalConfig {
    ExternalConfig {
        quote_api_urls: vec![format!("{UNREACHABLE}/random"), format!("{UNREACHABLE}/qod")],
        weather_api_url: UNREACHABLE.to_string(),
        timeout_secs: 2,
        quote_accept_invalid_certs: false,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(external: ExternalConfig) -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        external,
    }
}

/// Build the full application (same middleware stack as the server binary).
pub fn build_test_app(pool: PgPool) -> App {
    build_test_app_with(pool, offline_external())
}

pub fn build_test_app_with(pool: PgPool, external: ExternalConfig) -> App {
    let state = AppState::new(pool, test_config(external)).unwrap();
    build_app(state)
}

/// A pool that never connects, for endpoints that do not touch the database.
/// Acquiring from it gives up after a second.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("postgres://taskboard@127.0.0.1:9/unused")
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send(app: App, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: App, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, body).await
}

pub async fn patch_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PATCH, uri, body).await
}

/// Create a project through the API and return its id.
pub async fn create_project(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/projects", body).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a task through the API and return its id.
pub async fn create_task(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/tasks", body).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

pub fn minimal_project(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "budget": "1000.00",
        "status": "planning",
        "start_date": "2024-01-01",
    })
}
