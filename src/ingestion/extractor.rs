//! PDF Text Extraction
//!
//! Turns raw PDF bytes into the shape the rest of the crate works on: a page
//! count plus non-blank trimmed lines. The extractor emits pages separated
//! by form feeds, so pages are split off first and lines are read inside
//! each page.

use crate::error::ServiceError;

const PAGE_SEPARATOR: char = '\u{000C}';

/// Extracted text content of one PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub page_count: usize,
    pub lines: Vec<String>,
}

/// Parses PDF bytes into pages and lines. Parser failures surface as
/// extraction errors with the parser's own message attached.
pub fn extract(bytes: &[u8]) -> Result<ExtractedText, ServiceError> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ServiceError::Extraction {
            message: e.to_string(),
        })?;
    Ok(structure_text(&text))
}

/// Builds the extracted shape from already-decoded text. A PDF with no
/// extractable text yields zero pages and no lines, which is still a valid
/// document.
pub fn structure_text(text: &str) -> ExtractedText {
    ExtractedText {
        page_count: count_pages(text),
        lines: split_lines(text),
    }
}

fn count_pages(text: &str) -> usize {
    text.split(PAGE_SEPARATOR)
        .filter(|page| !page.trim().is_empty())
        .count()
}

fn split_lines(text: &str) -> Vec<String> {
    text.split(PAGE_SEPARATOR)
        .flat_map(|page| page.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
