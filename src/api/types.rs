// src/api/types.rs
// Wire types for the HTTP surface

use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, Role};

/// Body of `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Every chat reply, success or failure, has this shape
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantReply {
    pub role: Role,
    pub content: String,
}

impl AssistantReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProviderStatus {
    pub name: &'static str,
    pub available: bool,
}

/// Body of `GET /api/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub static_patterns: usize,
    pub providers: Vec<ProviderStatus>,
}
