// src/llm/provider/mod.rs
// Generation provider trait and per-tier request parameters
use async_trait::async_trait;

use super::error::ProviderError;
use crate::prompt::ProviderInput;

pub mod gemini;
pub mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Sampling settings fixed per provider tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    /// Primary tier: low variance, room for a short paragraph
    pub const PRIMARY: Self = Self {
        temperature: 0.4,
        max_output_tokens: 500,
    };

    /// Secondary tier: same temperature, tighter output
    pub const SECONDARY: Self = Self {
        temperature: 0.4,
        max_output_tokens: 300,
    };
}

/// External text generator consulted by the provider chain
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Stable name, reported as `provider:<name>`
    fn name(&self) -> &'static str;

    /// Environment variable carrying the credential, for operator diagnostics
    fn credential_env(&self) -> &'static str;

    /// False when the credential is missing; the chain then skips this provider
    fn is_available(&self) -> bool;

    async fn generate(&self, input: &ProviderInput) -> Result<String, ProviderError>;
}
