// src/resolver.rs
// Query resolution: static cache, then the provider chain, then a fixed
// offline message.
//
// `QueryResolver::resolve` never fails. Each tier turns its own failures
// (including panics) into "no result", and an outer guard turns anything
// that still escapes into a distinct internal-error reply.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::cache::StaticResponseCache;
use crate::chat::ChatMessage;
use crate::config::UplinkConfig;
use crate::llm::chain::{panic_message, ProviderChain};
use crate::llm::default_chain;
use crate::prompt::ContextualPromptBuilder;

pub const OFFLINE_HEADER: &str = "SYSTEM ALERT: ALL AI UPLINKS OFFLINE.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "SYSTEM ERROR: SIGNAL LOST. \n\nInternal server interference detected.";

/// Which tier produced a reply. Not shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    StaticCache,
    Provider(&'static str),
    Fallback,
    InternalError,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSource::StaticCache => f.write_str("static-cache"),
            ResolutionSource::Provider(name) => write!(f, "provider:{}", name),
            ResolutionSource::Fallback => f.write_str("fallback"),
            ResolutionSource::InternalError => f.write_str("internal-error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub content: String,
    pub source: ResolutionSource,
}

impl ResolutionResult {
    fn internal_error() -> Self {
        Self {
            content: INTERNAL_ERROR_MESSAGE.to_string(),
            source: ResolutionSource::InternalError,
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("conversation history is empty")]
    EmptyHistory,
}

pub struct QueryResolver {
    cache: StaticResponseCache,
    prompts: ContextualPromptBuilder,
    chain: ProviderChain,
}

impl QueryResolver {
    pub fn new(cache: StaticResponseCache, prompts: ContextualPromptBuilder, chain: ProviderChain) -> Self {
        Self { cache, prompts, chain }
    }

    /// Curated cache, portfolio persona and the Gemini → OpenAI chain
    pub fn from_config(config: &UplinkConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            StaticResponseCache::curated()?,
            ContextualPromptBuilder::portfolio(config.history_window),
            default_chain(config),
        ))
    }

    pub fn cache(&self) -> &StaticResponseCache {
        &self.cache
    }

    pub fn chain(&self) -> &ProviderChain {
        &self.chain
    }

    /// Resolve the latest message of `history` into a reply
    pub async fn resolve(&self, history: &[ChatMessage]) -> ResolutionResult {
        let result = match AssertUnwindSafe(self.try_resolve(history)).catch_unwind().await {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                error!(error = %err, "query resolution failed");
                ResolutionResult::internal_error()
            }
            Err(payload) => {
                error!(panic = %panic_message(payload.as_ref()), "query resolution panicked");
                ResolutionResult::internal_error()
            }
        };

        info!(source = %result.source, "query resolved");
        result
    }

    async fn try_resolve(&self, history: &[ChatMessage]) -> Result<ResolutionResult, ResolveError> {
        let latest = history.last().ok_or(ResolveError::EmptyHistory)?;

        if let Some(content) = self.check_cache(&latest.content) {
            return Ok(ResolutionResult {
                content,
                source: ResolutionSource::StaticCache,
            });
        }

        let input = self.prompts.build(history);
        if let Some(generated) = self.chain.resolve(&input).await {
            return Ok(ResolutionResult {
                content: generated.text,
                source: ResolutionSource::Provider(generated.provider),
            });
        }

        Ok(ResolutionResult {
            content: offline_message(&self.chain.missing_credentials()),
            source: ResolutionSource::Fallback,
        })
    }

    fn check_cache(&self, query: &str) -> Option<String> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.cache.lookup(query))) {
            Ok(hit) => {
                if hit.is_none() {
                    debug!("static cache miss");
                }
                hit
            }
            Err(payload) => {
                warn!(panic = %panic_message(payload.as_ref()), "static cache panicked, treating as miss");
                None
            }
        }
    }
}

/// Terminal reply naming the credentials an operator still has to set
pub fn offline_message(missing: &[&str]) -> String {
    match missing {
        [] => format!(
            "{} \n\nEvery configured provider failed to respond. Please try again shortly.",
            OFFLINE_HEADER
        ),
        _ => format!(
            "{} \n\nPlease ensure {} is configured.",
            OFFLINE_HEADER,
            missing.join(" or ")
        ),
    }
}
