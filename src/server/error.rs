//! Error-to-response mapping for the HTTP boundary
//!
//! Every domain error plus the two boundary-only conditions (no usable
//! input, nothing generated yet) maps onto a status code and a short
//! message. Nothing is retried; no partial output is produced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

use crate::export::ExportError;
use crate::extract::ExtractError;
use crate::generate::GenerateError;

/// Everything the HTTP boundary can reject a request with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No content provided")]
    EmptyInput,

    #[error("No cards to export")]
    NoSessionData,

    #[error("Invalid format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Invalid count: '{0}'")]
    InvalidCount(String),

    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Generation(#[from] GenerateError),

    #[error(transparent)]
    Export(ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::EmptyInput
            | Self::NoSessionData
            | Self::UnsupportedFormat(_)
            | Self::InvalidCount(_)
            | Self::BadRequest(_)
            | Self::Extraction(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) => StatusCode::BAD_GATEWAY,
            Self::Export(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            // Rejected at the boundary: the caller named a format that
            // does not exist, which is their error, not ours.
            ExportError::UnsupportedFormat(format) => Self::UnsupportedFormat(format),
            other => Self::Export(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, error = %self, "into_response: rejecting request");
        (status, self.to_string()).into_response()
    }
}
