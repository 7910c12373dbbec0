mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, post_json, test_app};

async fn seed(app: axum::Router) {
    let batches = [
        json!({ "tags": ["Chess", "go", "poker"] }),
        json!({ "tags": ["chess", "go"] }),
        json!({ "tags": ["chess", "uno"] }),
    ];
    for batch in batches {
        let (status, _) = post_json(app.clone(), "/api/tags", batch).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_record_tags_returns_count() {
    let app = test_app();

    let (status, body) = post_json(app, "/api/tags", json!({ "tags": ["chess", "go"] })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["recorded"], 2);
}

#[tokio::test]
async fn test_record_tags_rejects_empty_list() {
    let app = test_app();

    let (status, body) = post_json(app, "/api/tags", json!({ "tags": [] })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("between 1 and 20"));
}

#[tokio::test]
async fn test_record_tags_rejects_bad_characters() {
    let app = test_app();

    let (status, body) = post_json(app, "/api/tags", json!({ "tags": ["no spaces"] })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("no spaces"));
}

#[tokio::test]
async fn test_popular_tags_ordered_by_uses() {
    let app = test_app();
    seed(app.clone()).await;

    let (status, body) = get(app, "/api/tags/popular").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["chess", "go", "poker", "uno"]);
    assert_eq!(body["data"][0]["uses"], 3);
    assert_eq!(body["meta"]["total"], 4);
    assert_eq!(body["meta"]["limit"], 10);
    assert_eq!(body["meta"]["has_more"], false);
}

#[tokio::test]
async fn test_popular_tags_page_window() {
    let app = test_app();
    seed(app.clone()).await;

    let (status, body) = get(app, "/api/tags/popular?limit=2&page=2").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["poker", "uno"]);
    assert_eq!(body["meta"]["page"], 2);
    assert_eq!(body["meta"]["offset"], 2);
    assert_eq!(body["meta"]["has_more"], false);
}

#[tokio::test]
async fn test_popular_tags_offset_past_end() {
    let app = test_app();
    seed(app.clone()).await;

    let (status, body) = get(app, "/api/tags/popular?offset=50").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["total"], 4);
}

#[tokio::test]
async fn test_popular_tags_limit_clamped() {
    let app = test_app();

    let (status, body) = get(app, "/api/tags/popular?limit=1000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["limit"], 100);
}

#[tokio::test]
async fn test_popular_tags_blank_params_use_defaults() {
    let app = test_app();

    let (status, body) = get(app, "/api/tags/popular?limit=&page=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["limit"], 10);
}

#[tokio::test]
async fn test_popular_tags_rejects_garbage_limit() {
    let app = test_app();

    let (status, body) = get(app, "/api/tags/popular?limit=ten").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
