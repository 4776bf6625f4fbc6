//! Request handlers for generation and export

use std::path::Path as FsPath;

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::{ApiError, AppState};
use crate::cards::Flashcard;
use crate::export::{self, ExportFormat};
use crate::extract::{self, SourceKind};

/// JSON body returned by a successful generation
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation: u64,
    pub cards: Vec<Flashcard>,
}

/// Extract the `session` cookie value, if present
fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == "session")
        .map(|(_, value)| value.to_string())
}

/// Reduce an uploaded filename to a safe basename
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.chars().filter(|c| !c.is_control()).collect()
}

/// `POST /generate` - multipart form with optional `file`, optional
/// `text`, and a required `count`.
///
/// Extracted file text and pasted text are concatenated; an upload with
/// an unrecognized extension contributes no text. If nothing usable
/// remains the request is rejected before any model call.
pub async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    debug!("generate: called");
    let mut pasted = String::new();
    let mut count: Option<u32> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| ApiError::BadRequest(e.to_string()))? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(sanitize_filename).unwrap_or_default();
                let data = field.bytes().await.map_err(|e| ApiError::BadRequest(e.to_string()))?;
                debug!(%file_name, size = data.len(), "generate: received upload");
                if !file_name.is_empty() && !data.is_empty() {
                    upload = Some((file_name, data.to_vec()));
                }
            }
            "text" => {
                pasted = field.text().await.map_err(|e| ApiError::BadRequest(e.to_string()))?;
            }
            "count" => {
                let raw = field.text().await.map_err(|e| ApiError::BadRequest(e.to_string()))?;
                count = Some(raw.trim().parse().map_err(|_| ApiError::InvalidCount(raw.clone()))?);
            }
            other => {
                debug!(field = %other, "generate: ignoring unknown field");
            }
        }
    }

    let count = count.ok_or_else(|| ApiError::InvalidCount("missing".to_string()))?;

    let mut source_text = String::new();
    if let Some((file_name, data)) = upload {
        match SourceKind::from_path(FsPath::new(&file_name)) {
            Some(kind) => {
                let dir = &state.config.storage.upload_dir;
                std::fs::create_dir_all(dir)?;
                let path = dir.join(&file_name);
                std::fs::write(&path, &data)?;
                info!(path = %path.display(), %kind, "generate: stored upload");
                source_text = extract::extract(&path, kind)?;
            }
            None => {
                debug!(%file_name, "generate: upload has unsupported extension, ignoring");
            }
        }
    }

    let pasted = pasted.trim();
    if !pasted.is_empty() {
        if !source_text.is_empty() {
            source_text.push('\n');
        }
        source_text.push_str(pasted);
    }

    if source_text.trim().is_empty() {
        return Err(ApiError::EmptyInput);
    }

    let cards = state.generator.generate(&source_text, count).await?;

    let (session, new_session) = match session_from_headers(&headers) {
        Some(session) => (session, false),
        None => (Uuid::now_v7().to_string(), true),
    };
    let generation = state.sessions.put(&session, cards.clone());
    info!(%session, generation, count = cards.len(), "generate: stored set");

    let mut response = Json(GenerateResponse { generation, cards }).into_response();
    if new_session {
        let cookie = format!("session={}; Path=/; HttpOnly", session);
        if let Ok(value) = header::HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    Ok(response)
}

/// `GET /export/{format}` - write the session's current set in the
/// requested format and return it as a downloadable attachment.
pub async fn export(
    State(state): State<AppState>,
    Path(format): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    debug!(%format, "export: called");
    let format = ExportFormat::parse(&format)?;

    let session = session_from_headers(&headers).ok_or(ApiError::NoSessionData)?;
    let stored = state.sessions.get(&session).ok_or(ApiError::NoSessionData)?;

    let path = export::export(&stored.cards, format, &state.config.storage)?;
    let bytes = std::fs::read(&path)?;
    info!(%session, generation = stored.generation, path = %path.display(), "export: artifact ready");

    let disposition = format!("attachment; filename=\"{}\"", format.file_name());
    let response = Response::builder()
        .header(header::CONTENT_TYPE, format.content_type())
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from(bytes))
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_headers_finds_session_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "theme=dark; session=abc-123; lang=en".parse().unwrap());

        assert_eq!(session_from_headers(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_session_from_headers_none_without_cookie() {
        assert_eq!(session_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_sanitize_filename_strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd.txt"), "passwd.txt");
        assert_eq!(sanitize_filename("C:\\Users\\x\\notes.docx"), "notes.docx");
        assert_eq!(sanitize_filename("plain.pdf"), "plain.pdf");
    }

    #[test]
    fn test_sanitize_filename_drops_control_characters() {
        assert_eq!(sanitize_filename("notes\n.txt"), "notes.txt");
    }
}
