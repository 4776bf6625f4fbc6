//! PDF text extraction

use std::fs;
use std::path::Path;

use tracing::debug;

use super::ExtractError;

/// Concatenate the text content of every page, in page order.
pub fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    debug!(?path, "extract_pdf: called");
    let bytes = fs::read(path).map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
