// src/prompt/mod.rs
// Provider-agnostic prompt assembly: persona block + bounded, normalized turns

pub mod persona;
pub mod profile;

pub use persona::PORTFOLIO_CONTEXT;

use std::sync::Arc;

use crate::chat::{ChatMessage, Role};

pub const DEFAULT_HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

impl From<Role> for TurnRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => TurnRole::User,
            Role::Assistant => TurnRole::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

/// What every generation provider receives
#[derive(Debug, Clone)]
pub struct ProviderInput {
    /// Persona / system instruction
    pub system: Arc<str>,
    /// Oldest first; starts with a user turn whenever the window holds one
    pub turns: Vec<Turn>,
}

pub struct ContextualPromptBuilder {
    history_window: usize,
    context: Arc<str>,
}

impl ContextualPromptBuilder {
    pub fn new(history_window: usize, context: impl Into<Arc<str>>) -> Self {
        Self {
            history_window: history_window.max(1),
            context: context.into(),
        }
    }

    /// Builder over the rendered portfolio persona
    pub fn portfolio(history_window: usize) -> Self {
        Self::new(history_window, PORTFOLIO_CONTEXT.as_str())
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    pub fn build(&self, history: &[ChatMessage]) -> ProviderInput {
        // Most recent `history_window` messages only
        let start = history.len().saturating_sub(self.history_window);
        let window = &history[start..];

        // Dialogue must open on a user turn. A window with no user turn at
        // all is passed through untouched.
        let window = match window.iter().position(|m| m.role == Role::User) {
            Some(first_user) => &window[first_user..],
            None => window,
        };

        ProviderInput {
            system: Arc::clone(&self.context),
            turns: window
                .iter()
                .map(|m| Turn {
                    role: m.role.into(),
                    text: m.content.clone(),
                })
                .collect(),
        }
    }
}
