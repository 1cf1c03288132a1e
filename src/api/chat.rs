// src/api/chat.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use super::error::{ApiError, ApiResult};
use super::types::{AssistantReply, ChatRequest, ProviderStatus, StatusResponse};
use super::AppState;
use crate::resolver::{ResolutionResult, ResolutionSource};

/// Which tier answered; for operators and tests, not shown in the widget
pub const SOURCE_HEADER: &str = "x-uplink-source";

/// `POST /api/chat`
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected chat payload");
        ApiError::internal()
    })?;

    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id, messages = request.messages.len());
    let result = state.resolver.resolve(&request.messages).instrument(span).await;

    Ok(reply(result))
}

fn reply(result: ResolutionResult) -> Response {
    let status = match result.source {
        ResolutionSource::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    let source = HeaderValue::from_str(&result.source.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"));

    (
        status,
        [(SOURCE_HEADER, source)],
        Json(AssistantReply::new(result.content)),
    )
        .into_response()
}

/// `GET /api/status`
pub async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let providers = state
        .resolver
        .chain()
        .providers()
        .iter()
        .map(|p| ProviderStatus {
            name: p.name(),
            available: p.is_available(),
        })
        .collect();

    Json(StatusResponse {
        status: "online",
        version: env!("CARGO_PKG_VERSION"),
        static_patterns: state.resolver.cache().patterns().len(),
        providers,
    })
}
