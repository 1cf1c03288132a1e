// src/llm/error.rs

use std::time::Duration;
use thiserror::Error;

/// Why a single provider attempt produced nothing usable.
///
/// All of these are recoverable: the chain logs them and moves on.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("response contained no text")]
    EmptyResponse,

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider panicked: {0}")]
    Panicked(String),
}

impl ProviderError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Transport(_) => "transport",
            ProviderError::Status { status: 401 | 403, .. } => "auth",
            ProviderError::Status { status: 429, .. } => "rate_limit",
            ProviderError::Status { .. } => "status",
            ProviderError::Upstream(_) => "upstream",
            ProviderError::EmptyResponse => "empty",
            ProviderError::Timeout(_) => "timeout",
            ProviderError::Panicked(_) => "panic",
        }
    }
}
