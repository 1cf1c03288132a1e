// src/llm/provider/openai.rs
// OpenAI Chat Completions provider (secondary tier)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationParams, GenerationProvider};
use crate::config::UplinkConfig;
use crate::llm::error::ProviderError;
use crate::prompt::{ProviderInput, TurnRole};

pub const CREDENTIAL_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    params: GenerationParams,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            params: GenerationParams::SECONDARY,
        }
    }

    pub fn from_config(config: &UplinkConfig) -> Self {
        Self::new(config.openai_api_key.clone(), config.openai_model.clone())
            .with_base_url(&config.openai_base_url)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn build_request(&self, input: &ProviderInput) -> OpenAiRequest {
        let mut messages = Vec::with_capacity(input.turns.len() + 1);
        messages.push(OpenAiMessage {
            role: "system",
            content: input.system.to_string(),
        });

        for turn in &input.turns {
            messages.push(OpenAiMessage {
                role: match turn.role {
                    TurnRole::User => "user",
                    TurnRole::Assistant => "assistant",
                },
                content: turn.text.clone(),
            });
        }

        OpenAiRequest {
            model: self.model.clone(),
            messages,
            temperature: self.params.temperature,
            max_tokens: self.params.max_output_tokens,
        }
    }
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn credential_env(&self) -> &'static str {
        CREDENTIAL_ENV
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, input: &ProviderInput) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Upstream(format!("{} not set", CREDENTIAL_ENV)))?;

        debug!(model = %self.model, turns = input.turns.len(), "OpenAI request");

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&self.build_request(input))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let api_response: OpenAiResponse = response.json().await?;

        if let Some(error) = api_response.error {
            return Err(ProviderError::Upstream(error.message));
        }

        api_response
            .choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Option<Vec<OpenAiChoice>>,
    error: Option<OpenAiError>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessageResponse,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    message: String,
}
