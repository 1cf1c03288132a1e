// src/cache/mod.rs
// Static response cache - the zero-latency first tier.
//
// A fixed table of canned Q&A pairs checked before any provider is
// consulted. No network I/O, and the table never changes after startup.

pub mod matcher;
pub mod picker;
pub mod table;

pub use matcher::{best_match, PatternError, ResponsePattern};
pub use picker::{FixedPicker, RandomPicker, ResponsePicker};

use std::sync::Arc;
use tracing::debug;

pub struct StaticResponseCache {
    patterns: Vec<ResponsePattern>,
    picker: Arc<dyn ResponsePicker>,
}

impl StaticResponseCache {
    pub fn new(patterns: Vec<ResponsePattern>, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { patterns, picker }
    }

    /// Curated table with random reply selection
    pub fn curated() -> Result<Self, PatternError> {
        Ok(Self::new(table::curated_patterns()?, Arc::new(RandomPicker)))
    }

    /// Same table, different reply selection
    pub fn with_picker(self, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { picker, ..self }
    }

    pub fn patterns(&self) -> &[ResponsePattern] {
        &self.patterns
    }

    /// A canned reply when the query hits the table
    pub fn lookup(&self, query: &str) -> Option<String> {
        let pattern = best_match(query, &self.patterns)?;
        let responses = pattern.responses();
        let index = self.picker.pick(responses.len()).min(responses.len() - 1);

        debug!(priority = pattern.priority(), index, "static cache hit");
        Some(responses[index].clone())
    }
}
