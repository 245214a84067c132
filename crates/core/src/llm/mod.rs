// crates/core/src/llm/mod.rs
//! LLM integration for activity suggestions.
//!
//! Provides the `LlmProvider` trait and an implementation that talks to any
//! OpenAI-compatible chat-completion endpoint (Ollama, vLLM, OpenAI).

pub mod config;
pub mod openai;
pub mod provider;
pub mod types;

pub use config::LlmConfig;
pub use openai::OpenAiCompatProvider;
pub use provider::LlmProvider;
pub use types::{CompletionRequest, CompletionResponse, LlmError};
