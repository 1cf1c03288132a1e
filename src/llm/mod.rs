// src/llm/mod.rs
// Generation providers and the ordered fallback chain over them

pub mod chain;
pub mod error;
pub mod provider;

use std::sync::Arc;
use std::time::Duration;

pub use chain::{Attempt, Generated, ProviderChain};
pub use error::ProviderError;
pub use provider::{GeminiProvider, GenerationParams, GenerationProvider, OpenAiProvider};

use crate::config::UplinkConfig;

/// Gemini first, OpenAI second
pub fn default_chain(config: &UplinkConfig) -> ProviderChain {
    let providers: Vec<Arc<dyn GenerationProvider>> = vec![
        Arc::new(GeminiProvider::from_config(config)),
        Arc::new(OpenAiProvider::from_config(config)),
    ];
    ProviderChain::new(providers).with_timeout(Duration::from_secs(config.provider_timeout_secs))
}
