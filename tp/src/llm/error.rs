//! LLM error types

use thiserror::Error;

/// Errors that can occur during LLM operations
///
/// Every variant is fatal to the single request that produced it.
/// There is no retry policy anywhere in this system; recovery is the
/// user resubmitting.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = LlmError::ApiError {
            status: 500,
            message: "Server error".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: Server error");
    }

    #[test]
    fn test_empty_response_display() {
        assert_eq!(LlmError::EmptyResponse.to_string(), "Model returned no text");
    }
}
