// src/lib.rs

pub mod api;
pub mod cache;
pub mod chat;
pub mod config;
pub mod knowledge;
pub mod llm;
pub mod prompt;
pub mod resolver;

pub use chat::{ChatMessage, Role};
pub use resolver::{QueryResolver, ResolutionResult, ResolutionSource};
