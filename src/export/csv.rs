//! CSV export
//!
//! A two-column table with a `Question,Answer` header row. Values are
//! written verbatim; quoting is the csv writer's standard behavior.

use std::path::Path;

use tracing::debug;

use super::ExportError;
use crate::cards::Flashcard;

pub fn write_csv(cards: &[Flashcard], path: &Path) -> Result<(), ExportError> {
    debug!(count = cards.len(), ?path, "write_csv: called");
    let mut writer = csv::Writer::from_path(path).map_err(|e| ExportError::Render {
        format: "csv",
        message: e.to_string(),
    })?;

    writer.write_record(["Question", "Answer"]).map_err(|e| ExportError::Render {
        format: "csv",
        message: e.to_string(),
    })?;
    for card in cards {
        writer
            .write_record([card.question.as_str(), card.answer.as_str()])
            .map_err(|e| ExportError::Render {
                format: "csv",
                message: e.to_string(),
            })?;
    }

    writer.flush()?;
    Ok(())
}
