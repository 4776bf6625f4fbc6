//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Flashcard generation prompt
pub const FLASHCARDS: &str = include_str!("../../prompts/flashcards.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "flashcards" => {
            debug!("get_embedded: matched flashcards");
            Some(FLASHCARDS)
        }
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
