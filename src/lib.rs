//! cardforge - turn documents into question/answer flashcards
//!
//! A single-user request/response service: upload a document or paste
//! text, have a generative model produce `Q:`/`A:` flashcards from it,
//! and export the result as PDF, DOCX, or CSV.
//!
//! # Pipeline
//!
//! Extractor output (optionally concatenated with pasted text) flows
//! into the [`generate::Generator`], which renders the prompt, makes one
//! model call, and parses the response with [`cards::parse`]. The parsed
//! set is held in the per-session [`session::SessionStore`] until a later
//! export request reads it back and writes an artifact.
//!
//! # Modules
//!
//! - [`cards`] - flashcard data model and model-output parser
//! - [`extract`] - plain-text extraction from pdf/docx/pptx/txt sources
//! - [`llm`] - TextModel capability trait and the Gemini client
//! - [`prompts`] - Handlebars prompt templates with embedded fallbacks
//! - [`generate`] - prompt/call/parse orchestration
//! - [`export`] - pdf/docx/csv artifact writers
//! - [`session`] - per-session slot for the last generated set
//! - [`server`] - axum HTTP boundary
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cards;
pub mod cli;
pub mod config;
pub mod export;
pub mod extract;
pub mod generate;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod session;

// Re-export commonly used types
pub use cards::{Flashcard, parse};
pub use config::{Config, LlmConfig, ServerConfig, StorageConfig};
pub use export::{ExportError, ExportFormat, export};
pub use extract::{ExtractError, SourceKind, extract};
pub use generate::{GenerateError, Generator};
pub use llm::{GeminiClient, LlmError, TextModel, create_model};
pub use prompts::{PromptContext, PromptLoader};
pub use server::{ApiError, AppState, GenerateResponse};
pub use session::{SessionStore, StoredSet};
