//! Model client error types

use thiserror::Error;

/// Errors that can occur during a model call.
///
/// None of these are retried internally; a failed call propagates
/// unchanged to the caller.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API key not set: {0}")]
    MissingKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = LlmError::ApiError {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: overloaded");
    }

    #[test]
    fn test_display_names_missing_key_var() {
        let err = LlmError::MissingKey("GEMINI_API_KEY".to_string());
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
