// src/api/mod.rs
// HTTP surface consumed by the chat widget

pub mod chat;
pub mod error;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use types::*;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::resolver::QueryResolver;

pub struct AppState {
    pub resolver: QueryResolver,
}

impl AppState {
    pub fn new(resolver: QueryResolver) -> Self {
        Self { resolver }
    }
}

pub fn router(state: Arc<AppState>, cors_origin: &str) -> anyhow::Result<Router> {
    Ok(Router::new()
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/status", get(chat::status_handler))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(HeaderValue::from_str(origin)?)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
