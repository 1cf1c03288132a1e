// src/llm/chain.rs
// Ordered provider chain with per-provider failure isolation.
//
// Providers are stored in priority order (index 0 = primary). Each is
// tried in turn, strictly sequentially; the first one that returns
// non-blank text wins. Providers without credentials are skipped.
// Failures (errors, timeouts, blank text, panics) are logged and the next
// provider is tried. Nothing a provider does reaches the caller as an error.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use tracing::{debug, info, warn};

use super::error::ProviderError;
use super::provider::GenerationProvider;
use crate::prompt::ProviderInput;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(20);

/// Outcome of consulting one provider
#[derive(Debug)]
pub enum Attempt {
    Success(String),
    Unavailable,
    Failure(ProviderError),
}

/// Text produced by the chain and the provider that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub provider: &'static str,
    pub text: String,
}

pub struct ProviderChain {
    providers: Vec<Arc<dyn GenerationProvider>>,
    timeout: Duration,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn GenerationProvider>>) -> Self {
        Self {
            providers,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn providers(&self) -> &[Arc<dyn GenerationProvider>] {
        &self.providers
    }

    /// Credential variables of every provider that is currently disabled
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        self.providers
            .iter()
            .filter(|p| !p.is_available())
            .map(|p| p.credential_env())
            .collect()
    }

    pub async fn resolve(&self, input: &ProviderInput) -> Option<Generated> {
        for provider in &self.providers {
            let name = provider.name();
            match self.attempt(provider.as_ref(), input).await {
                Attempt::Success(text) => {
                    return Some(Generated {
                        provider: name,
                        text,
                    });
                }
                Attempt::Unavailable => {
                    debug!(provider = name, "skipping provider without credentials");
                }
                Attempt::Failure(err) => {
                    warn!(provider = name, kind = err.kind(), error = %err, "provider failed, falling through");
                }
            }
        }

        None
    }

    /// Consult one provider, bounded by the chain timeout
    pub async fn attempt(&self, provider: &dyn GenerationProvider, input: &ProviderInput) -> Attempt {
        if !provider.is_available() {
            return Attempt::Unavailable;
        }

        let start = Instant::now();
        let call = AssertUnwindSafe(provider.generate(input)).catch_unwind();

        let outcome = match tokio::time::timeout(self.timeout, call).await {
            Err(_) => Err(ProviderError::Timeout(self.timeout)),
            Ok(Err(panic)) => Err(ProviderError::Panicked(panic_message(panic.as_ref()))),
            Ok(Ok(result)) => result,
        };

        match outcome {
            Ok(text) if text.trim().is_empty() => Attempt::Failure(ProviderError::EmptyResponse),
            Ok(text) => {
                info!(
                    provider = provider.name(),
                    latency_ms = start.elapsed().as_millis() as u64,
                    "provider answered"
                );
                Attempt::Success(text)
            }
            Err(err) => Attempt::Failure(err),
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
