#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use playdeck::playdeck_config::{AppConfig, CorsConfig, Environment, HasherConfig, ServerConfig};
use playdeck::playdeck_core::password::MIN_COST;
use playdeck::router::init_router;
use playdeck::state::AppState;

pub const TEST_PEPPER: &str = "integration-test-pepper";

/// Configuration with the cheapest bcrypt cost so tests stay fast.
pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Test,
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            notification_capacity: 16,
        },
        cors: CorsConfig::default(),
        hasher: HasherConfig {
            pepper: TEST_PEPPER.to_string(),
            cost: MIN_COST,
            using_fallback_pepper: false,
        },
    }
}

pub fn test_state() -> AppState {
    AppState::from_config(&test_config()).unwrap()
}

pub fn test_app() -> Router {
    init_router(test_state())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, body)
}
