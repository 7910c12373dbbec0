mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{get, post_json, send, test_app};

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = test_app();

    let (status, body) = get(app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/credentials/hash",
        "/api/credentials/verify",
        "/api/credentials/temporary",
        "/api/games/events",
        "/api/games/notifications",
        "/api/games/{game_id}/events",
        "/api/tags",
        "/api/tags/popular",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let app = test_app();

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = test_app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let app = test_app();

    let (status, body) = post_json(app, "/api/credentials/hash", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let app = test_app();

    let (status, body) = post_json(app, "/api/tags", json!({ "tags": "chess" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid field type in request");
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/tags")
        .body(Body::from(r#"{"tags":["chess"]}"#))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing 'Content-Type: application/json' header");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app();

    let (status, _) = get(app, "/api/nothing-here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
