//! DOCX export
//!
//! Each flashcard becomes two paragraphs, `Q{i}: ...` and `A{i}: ...`,
//! then one empty spacer paragraph, in sequence order.

use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};
use tracing::debug;

use super::ExportError;
use crate::cards::Flashcard;

pub fn write_docx(cards: &[Flashcard], path: &Path) -> Result<(), ExportError> {
    debug!(count = cards.len(), ?path, "write_docx: called");
    let mut doc = Docx::new();
    for (i, card) in cards.iter().enumerate() {
        let n = i + 1;
        doc = doc
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(format!("Q{}: {}", n, card.question))))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(format!("A{}: {}", n, card.answer))))
            .add_paragraph(Paragraph::new());
    }

    let file = File::create(path)?;
    doc.build().pack(file).map_err(|e| ExportError::Render {
        format: "docx",
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{self, SourceKind};

    #[test]
    fn test_write_docx_numbered_paragraphs_survive_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashcards.docx");
        let cards = vec![
            Flashcard::new("Was heißt Tür?", "Door — 扉"),
            Flashcard::new("Second?", "Also here"),
        ];

        write_docx(&cards, &path).unwrap();

        // Read the artifact back through the crate's own OOXML extractor.
        let text = extract::extract(&path, SourceKind::Docx).unwrap();
        assert!(text.contains("Q1: Was heißt Tür?"));
        assert!(text.contains("A1: Door — 扉"));
        assert!(text.contains("Q2: Second?"));
        assert!(text.contains("A2: Also here"));
        let q1 = text.find("Q1:").unwrap();
        let q2 = text.find("Q2:").unwrap();
        assert!(q1 < q2, "cards must keep their sequence order");
    }

    #[test]
    fn test_write_docx_empty_set_is_valid_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashcards.docx");

        write_docx(&[], &path).unwrap();

        let text = extract::extract(&path, SourceKind::Docx).unwrap();
        assert_eq!(text, "");
    }
}
