// tests/provider_http_test.rs
// Provider wire format against an in-process fake upstream

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uplink::chat::ChatMessage;
use uplink::config::{FileConfig, UplinkConfig};
use uplink::llm::{GeminiProvider, GenerationProvider, OpenAiProvider, ProviderError};
use uplink::prompt::{ContextualPromptBuilder, ProviderInput};
use uplink::resolver::{QueryResolver, ResolutionSource};

// ============================================================================
// Fake upstream
// ============================================================================

#[derive(Default)]
struct Captured {
    path: Option<String>,
    headers: Option<HeaderMap>,
    body: Option<Value>,
}

type Shared = Arc<Mutex<Captured>>;

#[derive(Clone)]
struct Upstream {
    captured: Shared,
    status: StatusCode,
    reply: Value,
}

async fn gemini_route(
    State(upstream): State<Upstream>,
    Path(model): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut captured = upstream.captured.lock().unwrap();
    captured.path = Some(model);
    captured.headers = Some(headers);
    captured.body = Some(body);
    (upstream.status, Json(upstream.reply.clone()))
}

async fn openai_route(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut captured = upstream.captured.lock().unwrap();
    captured.headers = Some(headers);
    captured.body = Some(body);
    (upstream.status, Json(upstream.reply.clone()))
}

/// Serve one fake provider endpoint, returning its base URL
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn fake_gemini(status: StatusCode, reply: Value) -> (String, Shared) {
    let captured = Shared::default();
    let router = Router::new()
        .route("/v1beta/models/{model}", post(gemini_route))
        .with_state(Upstream { captured: captured.clone(), status, reply });
    (spawn_upstream(router).await, captured)
}

async fn fake_openai(status: StatusCode, reply: Value) -> (String, Shared) {
    let captured = Shared::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(openai_route))
        .with_state(Upstream { captured: captured.clone(), status, reply });
    (spawn_upstream(router).await, captured)
}

fn input() -> ProviderInput {
    ContextualPromptBuilder::new(10, "persona block").build(&[
        ChatMessage::assistant("SYSTEM ONLINE."),
        ChatMessage::user("first question"),
        ChatMessage::assistant("first answer"),
        ChatMessage::user("favorite color?"),
    ])
}

fn config_from(pairs: &[(&str, &str)]) -> UplinkConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    UplinkConfig::resolve(move |key| env.get(key).cloned(), FileConfig::default())
}

// ============================================================================
// Gemini
// ============================================================================

#[tokio::test]
async fn test_gemini_request_and_reply() {
    let reply = json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": "DATA " }, { "text": "RETRIEVED" }] } }]
    });
    let (base, captured) = fake_gemini(StatusCode::OK, reply).await;

    let provider = GeminiProvider::new(Some("g-key".into()), "gemini-2.0-flash").with_base_url(&base);
    let text = provider.generate(&input()).await.unwrap();
    assert_eq!(text, "DATA RETRIEVED");

    let captured = captured.lock().unwrap();
    assert_eq!(captured.path.as_deref(), Some("gemini-2.0-flash:generateContent"));
    assert_eq!(captured.headers.as_ref().unwrap()["x-goog-api-key"], "g-key");

    let body = captured.body.as_ref().unwrap();
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "persona block");
    // leading assistant greeting dropped, assistant renamed to "model"
    assert_eq!(body["contents"].as_array().unwrap().len(), 3);
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][1]["role"], "model");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 500);
}

#[tokio::test]
async fn test_gemini_rate_limit_is_status_error() {
    let (base, _) = fake_gemini(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "quota" } }),
    )
    .await;

    let provider = GeminiProvider::new(Some("g-key".into()), "gemini-2.0-flash").with_base_url(&base);
    let err = provider.generate(&input()).await.unwrap_err();

    assert!(matches!(err, ProviderError::Status { status: 429, .. }));
    assert_eq!(err.kind(), "rate_limit");
}

#[tokio::test]
async fn test_gemini_without_candidates_is_empty() {
    let (base, _) = fake_gemini(StatusCode::OK, json!({ "candidates": [] })).await;

    let provider = GeminiProvider::new(Some("g-key".into()), "gemini-2.0-flash").with_base_url(&base);
    let err = provider.generate(&input()).await.unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse));
}

// ============================================================================
// OpenAI
// ============================================================================

#[tokio::test]
async fn test_openai_request_and_reply() {
    let reply = json!({ "choices": [{ "message": { "role": "assistant", "content": "AFFIRMATIVE." } }] });
    let (base, captured) = fake_openai(StatusCode::OK, reply).await;

    let provider = OpenAiProvider::new(Some("sk-test".into()), "gpt-4o-mini").with_base_url(&base);
    assert_eq!(provider.generate(&input()).await.unwrap(), "AFFIRMATIVE.");

    let captured = captured.lock().unwrap();
    assert_eq!(captured.headers.as_ref().unwrap()["authorization"], "Bearer sk-test");

    let body = captured.body.as_ref().unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["max_tokens"], 300);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][3]["content"], "favorite color?");
}

#[tokio::test]
async fn test_openai_null_content_is_empty() {
    let reply = json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] });
    let (base, _) = fake_openai(StatusCode::OK, reply).await;

    let provider = OpenAiProvider::new(Some("sk-test".into()), "gpt-4o-mini").with_base_url(&base);
    let err = provider.generate(&input()).await.unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse));
}

// ============================================================================
// Full chain over real providers
// ============================================================================

#[tokio::test]
async fn test_gemini_outage_falls_back_to_openai() {
    let (gemini_base, _) = fake_gemini(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "error": { "message": "overloaded" } }),
    )
    .await;
    let (openai_base, openai_seen) = fake_openai(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "Green. DATA RETRIEVED." } }] }),
    )
    .await;

    let config = config_from(&[
        ("GOOGLE_GENERATIVE_AI_API_KEY", "g-key"),
        ("OPENAI_API_KEY", "sk-test"),
        ("UPLINK_GEMINI_BASE_URL", &gemini_base),
        ("UPLINK_OPENAI_BASE_URL", &openai_base),
    ]);
    let resolver = QueryResolver::from_config(&config).unwrap();

    let result = resolver
        .resolve(&[ChatMessage::user("what is your favorite color")])
        .await;

    assert_eq!(result.source, ResolutionSource::Provider("openai"));
    assert_eq!(result.content, "Green. DATA RETRIEVED.");
    assert!(openai_seen.lock().unwrap().body.is_some());
}

#[tokio::test]
async fn test_missing_primary_key_skips_to_secondary() {
    let (gemini_base, gemini_seen) = fake_gemini(StatusCode::OK, json!({})).await;
    let (openai_base, _) = fake_openai(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "from openai" } }] }),
    )
    .await;

    let config = config_from(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("UPLINK_GEMINI_BASE_URL", &gemini_base),
        ("UPLINK_OPENAI_BASE_URL", &openai_base),
    ]);
    let resolver = QueryResolver::from_config(&config).unwrap();

    let result = resolver.resolve(&[ChatMessage::user("tell me a joke")]).await;

    assert_eq!(result.source, ResolutionSource::Provider("openai"));
    assert!(gemini_seen.lock().unwrap().body.is_none(), "gemini must not be called without a key");
}
