// src/api/error.rs
// Error replies rendered in the same shape as a normal assistant reply,
// so the chat widget can always display `content` as-is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use super::chat::SOURCE_HEADER;
use super::types::AssistantReply;
use crate::resolver::{ResolutionSource, INTERNAL_ERROR_MESSAGE};

#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Internal failure with the standard "signal lost" text
    pub fn internal() -> Self {
        Self {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code,
            [(SOURCE_HEADER, ResolutionSource::InternalError.to_string())],
            Json(AssistantReply::new(self.message)),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
