//! Health check, index and general HTTP behaviour.

mod common;

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_without_database() {
    let response = get(common::build_test_app(common::lazy_pool()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn health_check_answers_well_before_request_timeout_when_database_is_down() {
    // Acquire never succeeds, so only the handler's own bound ends the ping.
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(60))
        .connect_lazy("postgres://taskboard@127.0.0.1:9/unused")
        .unwrap();

    let started = Instant::now();
    let response = get(common::build_test_app(pool), "/health").await;
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "degraded");
}

#[tokio::test]
async fn index_lists_endpoints() {
    let response = get(common::build_test_app(common::lazy_pool()), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().starts_with("Welcome"));
    assert_eq!(json["endpoints"]["projects"], "/api/projects/");
    assert_eq!(json["endpoints"]["weather"], "/api/external/weather/");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(
        common::build_test_app(common::lazy_pool()),
        "/this-route-does-not-exist",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn trailing_slash_is_normalized(pool: PgPool) {
    let with_slash = get(common::build_test_app(pool.clone()), "/api/projects/").await;
    assert_eq!(with_slash.status(), StatusCode::OK);

    let without_slash = get(common::build_test_app(pool), "/api/projects").await;
    assert_eq!(without_slash.status(), StatusCode::OK);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(common::build_test_app(common::lazy_pool()), "/").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36, "x-request-id should be a UUID string");
}

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(common::lazy_pool());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PATCH"),
        "Allow-Methods should contain PATCH, got: {allow_methods}"
    );
}
