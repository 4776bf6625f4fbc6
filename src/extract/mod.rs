//! Plain-text extraction from source documents.
//!
//! Dispatch over a closed set of source kinds. Unknown extensions are
//! rejected at the boundary (`SourceKind::from_extension` returns
//! `None`), never deeper in the pipeline.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

mod ooxml;
mod pdf;

/// Supported source document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Docx,
    Pptx,
    Txt,
}

impl SourceKind {
    /// Map a filename extension to a source kind, case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "pptx" => Some(Self::Pptx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Map a path's extension to a source kind
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Txt => "txt",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur during text extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt or unreadable PDF: {0}")]
    Pdf(String),

    #[error("Corrupt document container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("Malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("File is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Extract the plain text of a document.
///
/// The result is trimmed of leading and trailing whitespace. Failures
/// are surfaced to the caller; nothing here retries.
pub fn extract(path: &Path, kind: SourceKind) -> Result<String, ExtractError> {
    debug!(?path, %kind, "extract: called");
    let text = match kind {
        SourceKind::Pdf => pdf::extract_pdf(path)?,
        SourceKind::Docx => ooxml::extract_docx(path)?,
        SourceKind::Pptx => ooxml::extract_pptx(path)?,
        SourceKind::Txt => extract_txt(path)?,
    };

    let text = text.trim().to_string();
    debug!(%kind, text_len = text.len(), "extract: finished");
    Ok(text)
}

/// Read the whole file as UTF-8 text; a decoding failure is an error,
/// never a lossy conversion.
fn extract_txt(path: &Path) -> Result<String, ExtractError> {
    debug!(?path, "extract_txt: called");
    let bytes = fs::read(path).map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(String::from_utf8(bytes)?)
}
