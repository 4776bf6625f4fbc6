//! Model client module
//!
//! Provides the TextModel capability trait and the Gemini implementation.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod gemini;

pub use client::TextModel;
pub use error::LlmError;
pub use gemini::GeminiClient;

use crate::config::LlmConfig;

/// Create a model client based on the provider named in config
///
/// The provider string is a closed dispatch; unknown names are rejected
/// here rather than surfacing as a confusing transport error later.
pub fn create_model(config: &LlmConfig) -> Result<Arc<dyn TextModel>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_model: called");
    match config.provider.as_str() {
        "gemini" => {
            debug!("create_model: creating Gemini client");
            Ok(Arc::new(GeminiClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_model: unknown provider");
            Err(LlmError::InvalidResponse(format!(
                "Unknown model provider: '{}'. Supported: gemini",
                other
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;

    #[test]
    fn test_create_model_rejects_unknown_provider() {
        let config = LlmConfig {
            provider: "palmtree".to_string(),
            ..LlmConfig::default()
        };

        let err = create_model(&config).err().expect("provider should be rejected");
        assert!(err.to_string().contains("palmtree"));
    }
}
