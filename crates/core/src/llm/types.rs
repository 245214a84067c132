// crates/core/src/llm/types.rs
//! Request/response/error types for LLM integration.

use thiserror::Error;

/// Request for a chat completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: Option<String>,
    pub user_prompt: String,
    pub temperature: f32,
}

/// Response from a chat completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub model: Option<String>,
    pub latency_ms: u64,
}

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Request to LLM endpoint failed: {0}")]
    Transport(String),

    #[error("LLM endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseFailed(String),

    #[error("LLM response contained no message content")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Status {
            status: 401,
            body: "bad key".to_string(),
        };
        assert_eq!(err.to_string(), "LLM endpoint returned 401: bad key");

        let err = LlmError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Request to LLM endpoint failed: connection refused"
        );
    }
}
