// crates/core/src/llm/provider.rs
//! LlmProvider trait defining the interface for LLM integrations.

use async_trait::async_trait;

use super::types::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM providers that can run a chat completion.
///
/// Implementations include:
/// - `OpenAiCompatProvider`: POSTs to `{base_url}/chat/completions`
/// - test stubs that return canned text or errors
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run a completion with system + user prompt.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Provider name for logging/display (e.g. "openai-compat").
    fn name(&self) -> &str;

    /// Model identifier (e.g. "llama3:8b").
    fn model(&self) -> &str;
}
