// crates/core/src/llm/config.rs
//! LLM provider configuration.

use std::fmt;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_API_KEY: &str = "ollama";
pub const DEFAULT_MODEL: &str = "llama3:8b";

pub const ENV_BASE_URL: &str = "OLLAMA_BASE_URL";
pub const ENV_API_KEY: &str = "OLLAMA_API_KEY";
pub const ENV_MODEL: &str = "OLLAMA_MODEL";

/// Connection settings for the chat-completion endpoint.
///
/// Defaults point at a local Ollama server.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: DEFAULT_API_KEY.into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl LlmConfig {
    /// Read `OLLAMA_BASE_URL`, `OLLAMA_API_KEY` and `OLLAMA_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup(ENV_BASE_URL).unwrap_or(defaults.base_url),
            api_key: lookup(ENV_API_KEY).unwrap_or(defaults.api_key),
            model: lookup(ENV_MODEL).unwrap_or(defaults.model),
        }
    }

    /// Full URL of the chat-completions route.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}
