//! DOCX and PPTX text extraction
//!
//! Both formats are OOXML zip containers; the text lives in XML parts
//! that are streamed with quick-xml rather than fully deserialized.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;
use zip::ZipArchive;

use super::ExtractError;

/// Concatenate every paragraph's text, each followed by a newline, in
/// document order.
pub fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    debug!(?path, "extract_docx: called");
    let xml = read_part(path, "word/document.xml")?;
    collect_text(&xml, b"w:t", b"w:p")
}

/// For every slide in order, append each text-bearing shape's text
/// followed by a newline.
pub fn extract_pptx(path: &Path) -> Result<String, ExtractError> {
    debug!(?path, "extract_pptx: called");
    let file = File::open(path).map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut archive = ZipArchive::new(file)?;

    // Zip entry order is not slide order; sort by slide number.
    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = name.strip_prefix("ppt/slides/slide")?.strip_suffix(".xml")?;
            number.parse().ok().map(|n| (n, name.to_string()))
        })
        .collect();
    slides.sort();
    debug!(slide_count = slides.len(), "extract_pptx: found slides");

    let mut text = String::new();
    for (_, name) in slides {
        let mut xml = String::new();
        archive.by_name(&name)?.read_to_string(&mut xml).map_err(|e| ExtractError::Io {
            path: format!("{}!{}", path.display(), name),
            source: e,
        })?;
        text.push_str(&collect_text(&xml, b"a:t", b"p:txBody")?);
    }
    Ok(text)
}

/// Read a named XML part out of an OOXML container
fn read_part(path: &Path, part: &str) -> Result<String, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    archive.by_name(part)?.read_to_string(&mut xml).map_err(|e| ExtractError::Io {
        path: format!("{}!{}", path.display(), part),
        source: e,
    })?;
    Ok(xml)
}

/// Collect the character content of every `text_elem` element, emitting
/// a newline at the end of each `break_elem` element.
///
/// Text outside `text_elem` (indentation, layout markup) is ignored, and
/// run content is taken verbatim; interior whitespace is significant.
fn collect_text(xml: &str, text_elem: &[u8], break_elem: &[u8]) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.name().as_ref() == text_elem => in_text_run = true,
            Event::End(ref e) if e.name().as_ref() == text_elem => in_text_run = false,
            Event::End(ref e) if e.name().as_ref() == break_elem => out.push('\n'),
            // Self-closing empty paragraphs still count as paragraphs.
            Event::Empty(ref e) if e.name().as_ref() == break_elem => out.push('\n'),
            Event::Text(ref e) if in_text_run => out.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}
