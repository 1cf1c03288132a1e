// tests/api_test.rs
// HTTP surface: request/response shapes, status codes, source header

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use uplink::api::{self, chat::SOURCE_HEADER, AppState};
use uplink::config::{FileConfig, UplinkConfig};
use uplink::resolver::{QueryResolver, INTERNAL_ERROR_MESSAGE};

fn app() -> Router {
    let config = UplinkConfig::resolve(|_| None, FileConfig::default());
    let resolver = QueryResolver::from_config(&config).unwrap();
    api::router(Arc::new(AppState::new(resolver)), "*").unwrap()
}

async fn post_chat(body: String) -> (StatusCode, Option<String>, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let source = response
        .headers()
        .get(SOURCE_HEADER)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, source, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_cache_hit_over_http() {
    let body = json!({ "messages": [{ "role": "user", "content": "are you available for hire?" }] });
    let (status, source, reply) = post_chat(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("static-cache"));
    assert_eq!(reply["role"], "assistant");
    assert!(!reply["content"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_offline_reply_is_200() {
    let body = json!({
        "messages": [
            { "role": "assistant", "content": "SYSTEM ONLINE." },
            { "role": "user", "content": "what is your favorite color" }
        ]
    });
    let (status, source, reply) = post_chat(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("fallback"));
    assert!(reply["content"].as_str().unwrap().starts_with("SYSTEM ALERT"));
}

#[tokio::test]
async fn test_malformed_body_is_internal_error_reply() {
    let (status, source, reply) = post_chat("{not json".to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(source.as_deref(), Some("internal-error"));
    assert_eq!(reply["role"], "assistant");
    assert_eq!(reply["content"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_empty_history_is_internal_error_reply() {
    let (status, source, reply) = post_chat(json!({ "messages": [] }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(source.as_deref(), Some("internal-error"));
    assert_eq!(reply["content"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_missing_messages_field_is_internal_error_reply() {
    let (status, source, _) = post_chat(json!({ "history": [] }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(source.as_deref(), Some("internal-error"));
}

#[tokio::test]
async fn test_plural_question_served_from_cache() {
    let body = json!({ "messages": [{ "role": "user", "content": "what skills do you have?" }] });
    let (status, source, _) = post_chat(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("static-cache"));
}

#[tokio::test]
async fn test_status_lists_providers_in_order() {
    let response = app()
        .oneshot(Request::builder().uri("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let status: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status["status"], "online");
    assert_eq!(status["static_patterns"], 4);
    assert_eq!(status["providers"][0]["name"], "gemini");
    assert_eq!(status["providers"][0]["available"], false);
    assert_eq!(status["providers"][1]["name"], "openai");
}
