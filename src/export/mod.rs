//! Flashcard set export
//!
//! Dispatch over a closed set of output formats. Each format writes to a
//! fixed filename inside the export directory; a later export of the
//! same format silently overwrites the prior artifact.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

mod csv;
mod docx;
mod pdf;

use crate::cards::Flashcard;
use crate::config::StorageConfig;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
    Csv,
}

impl ExportFormat {
    /// Parse a format selector, case-insensitively.
    ///
    /// Unknown values are rejected here, before any file is written.
    pub fn parse(s: &str) -> Result<Self, ExportError> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "csv" => Ok(Self::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Fixed artifact filename for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Pdf => "flashcards.pdf",
            Self::Docx => "flashcards.docx",
            Self::Csv => "flashcards.csv",
        }
    }

    /// Content type served with the artifact
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Font loading failed: {0}")]
    Font(String),

    #[error("Failed to render {format} artifact: {message}")]
    Render { format: &'static str, message: String },

    #[error("I/O error writing export: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the flashcard set to the fixed per-format path under the
/// export directory and return that path.
///
/// All writers number cards by their 1-indexed position in the set and
/// preserve character content exactly. An empty set produces a valid,
/// openable artifact with no data rows/cards.
pub fn export(cards: &[Flashcard], format: ExportFormat, storage: &StorageConfig) -> Result<PathBuf, ExportError> {
    debug!(count = cards.len(), %format, "export: called");
    std::fs::create_dir_all(&storage.export_dir)?;
    let path = storage.export_dir.join(format.file_name());

    match format {
        ExportFormat::Pdf => pdf::write_pdf(cards, &path, storage)?,
        ExportFormat::Docx => docx::write_docx(cards, &path)?,
        ExportFormat::Csv => csv::write_csv(cards, &path)?,
    }

    debug!(path = %path.display(), "export: artifact written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!(ExportFormat::parse("pdf").unwrap(), ExportFormat::Pdf);
        assert_eq!(ExportFormat::parse("DOCX").unwrap(), ExportFormat::Docx);
        assert_eq!(ExportFormat::parse("csv").unwrap(), ExportFormat::Csv);
    }

    #[test]
    fn test_parse_unknown_format_is_rejected() {
        let err = ExportFormat::parse("xml").err().expect("xml must be rejected");
        assert!(matches!(err, ExportError::UnsupportedFormat(ref s) if s == "xml"));
    }

    #[test]
    fn test_unknown_format_writes_no_file() {
        // The format is rejected at parse time, so there is nothing to
        // dispatch and the export directory stays untouched.
        let dir = tempfile::tempdir().unwrap();
        assert!(ExportFormat::parse("xml").is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_file_names_are_fixed_per_format() {
        assert_eq!(ExportFormat::Pdf.file_name(), "flashcards.pdf");
        assert_eq!(ExportFormat::Docx.file_name(), "flashcards.docx");
        assert_eq!(ExportFormat::Csv.file_name(), "flashcards.csv");
    }
}
