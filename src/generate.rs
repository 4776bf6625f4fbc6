//! Flashcard generation orchestration.
//!
//! Renders the prompt, invokes the model once, and hands the raw
//! response text to the parser. Nothing here retries, times out, or
//! enforces the requested count.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::cards::{self, Flashcard};
use crate::llm::{LlmError, TextModel};
use crate::prompts::{PromptContext, PromptLoader};

/// Errors that can occur while generating a flashcard set
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("Prompt rendering failed: {0}")]
    Prompt(String),
}

/// Builds the prompt, calls the model, parses the response.
pub struct Generator {
    model: Arc<dyn TextModel>,
    prompts: PromptLoader,
}

impl Generator {
    pub fn new(model: Arc<dyn TextModel>, prompts: PromptLoader) -> Self {
        Self { model, prompts }
    }

    /// Generate a flashcard set from the given source text.
    ///
    /// `requested_count` is advisory to the prompt only: the model may
    /// return fewer, more, or zero usable pairs, and an empty result is
    /// not an error. Model failures propagate unchanged.
    pub async fn generate(&self, source_text: &str, requested_count: u32) -> Result<Vec<Flashcard>, GenerateError> {
        debug!(source_len = source_text.len(), requested_count, "generate: called");

        let context = PromptContext {
            count: requested_count,
            content: source_text.to_string(),
        };
        let prompt = self
            .prompts
            .render("flashcards", &context)
            .map_err(|e| GenerateError::Prompt(e.to_string()))?;

        let raw = self.model.generate(&prompt).await?;
        debug!(raw_len = raw.len(), "generate: model responded");

        let flashcards = cards::parse(&raw);
        info!(
            count = flashcards.len(),
            requested_count, "generate: parsed model output"
        );
        Ok(flashcards)
    }
}
