//! PDF export
//!
//! Rendered with genpdf: wrapped paragraphs, automatic pagination, and a
//! TrueType font family loaded from the configured font directory.
//! Built-in PDF fonts cannot encode arbitrary Unicode text, so the font
//! files (e.g. DejaVuSans-Regular.ttf and friends) must be present.

use std::path::Path;

use genpdf::{Document, SimplePageDecorator, elements, fonts};
use tracing::debug;

use super::ExportError;
use crate::cards::Flashcard;
use crate::config::StorageConfig;

pub fn write_pdf(cards: &[Flashcard], path: &Path, storage: &StorageConfig) -> Result<(), ExportError> {
    debug!(count = cards.len(), ?path, font_dir = %storage.font_dir.display(), "write_pdf: called");
    let family = fonts::from_files(&storage.font_dir, &storage.font_family, None)
        .map_err(|e| ExportError::Font(e.to_string()))?;

    let mut doc = Document::new(family);
    doc.set_title("Flashcards");
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    for (i, card) in cards.iter().enumerate() {
        let n = i + 1;
        doc.push(elements::Paragraph::new(format!("Q{}: {}", n, card.question)));
        doc.push(elements::Paragraph::new(format!("A{}: {}", n, card.answer)));
        doc.push(elements::Break::new(1.0));
    }

    doc.render_to_file(path).map_err(|e| ExportError::Render {
        format: "pdf",
        message: e.to_string(),
    })?;
    Ok(())
}
