//! Simulated latency as seen through the HTTP routes.
//!
//! Requests are driven in-process with `oneshot` so the paused clock measures
//! only the handler.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use item_store::{http, ItemStore, CONTENT_REQUIRED, DEFAULT_LATENCY, ID_QUERY_REQUIRED};
use serde_json::{json, Value};
use tokio::time::Instant;
use tower::ServiceExt;

async fn send(store: &Arc<ItemStore>, request: Request<Body>) -> (StatusCode, Value, Duration) {
    let start = Instant::now();
    let response = http::router(store.clone()).oneshot(request).await.unwrap();
    let elapsed = start.elapsed();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap(), elapsed)
}

fn json_request(method: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn non_string_content_waits_before_400() {
    let store = Arc::new(ItemStore::new());

    let (status, body, elapsed) = send(&store, json_request("POST", r#"{"content": 42}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": CONTENT_REQUIRED }));
    assert!(elapsed >= DEFAULT_LATENCY);
}

#[tokio::test(start_paused = true)]
async fn malformed_json_waits_before_500() {
    let store = Arc::new(ItemStore::new());

    let (status, _, elapsed) = send(&store, json_request("POST", "{not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(elapsed >= DEFAULT_LATENCY);

    let (status, _, elapsed) = send(&store, json_request("PATCH", "{not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(elapsed >= DEFAULT_LATENCY);
}

#[tokio::test(start_paused = true)]
async fn missing_patch_field_waits_before_400() {
    let store = Arc::new(ItemStore::new());

    let (status, _, elapsed) = send(&store, json_request("PATCH", r#"{"content": "b"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(elapsed >= DEFAULT_LATENCY);
}

#[tokio::test(start_paused = true)]
async fn missing_delete_id_waits_before_400() {
    let store = Arc::new(ItemStore::new());

    for uri in ["/items", "/items?id=%20"] {
        let (status, body, elapsed) = send(&store, delete_request(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body, json!({ "message": ID_QUERY_REQUIRED }));
        assert!(elapsed >= DEFAULT_LATENCY);
    }
}

#[tokio::test(start_paused = true)]
async fn successful_create_waits_once() {
    let store = Arc::new(ItemStore::new());

    let (status, body, elapsed) = send(&store, json_request("POST", r#"{"content": "a"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["content"], "a");
    assert!(elapsed >= DEFAULT_LATENCY);
    assert!(elapsed < DEFAULT_LATENCY * 2);
}
