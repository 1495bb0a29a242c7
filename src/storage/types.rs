//! Storage Data Types
//!
//! Record shapes shared by the stores, the ingestion pipeline and the HTTP
//! layer, plus the small time/size helpers the rest of the crate leans on.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Byte length expressed in kilobytes, rounded to two decimal places.
pub fn size_in_kb(byte_len: usize) -> f64 {
    (byte_len as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Metadata record for one ingested PDF document.
///
/// `lines` holds the extracted text split into non-blank trimmed lines;
/// everything else is derived once at ingestion time and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub file_name: String,
    pub created_at: u64,
    pub page_count: usize,
    pub lines: Vec<String>,
    pub size_kb: f64,
}

impl Document {
    /// Builds a fresh record for newly extracted content. The stored file
    /// name is prefixed with the upload timestamp so repeated uploads of the
    /// same file never collide in the blob store.
    pub fn new(
        original_name: &str,
        page_count: usize,
        lines: Vec<String>,
        byte_len: usize,
    ) -> Self {
        let created_at = now_ms();
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: format!("{}-{}", created_at, original_name),
            created_at,
            page_count,
            lines,
            size_kb: size_in_kb(byte_len),
        }
    }

    /// The full extracted text, lines joined by single spaces.
    pub fn full_text(&self) -> String {
        self.lines.join(" ")
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            file_name: self.file_name.clone(),
            created_at: self.created_at,
            page_count: self.page_count,
            line_count: self.lines.len(),
            size_kb: self.size_kb,
        }
    }
}

/// Listing view of a document: everything except the extracted lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub file_name: String,
    pub created_at: u64,
    pub page_count: usize,
    pub line_count: usize,
    pub size_kb: f64,
}

/// Response body for `GET /documents`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentListResponse {
    pub total: usize,
    pub documents: Vec<DocumentSummary>,
}

/// One failed phase of a two-phase delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFailure {
    pub phase: String,
    pub error: String,
}

/// Outcome of a two-phase delete. Both phases always run; either may fail
/// on its own and partial success is reported as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteReport {
    pub document_id: String,
    pub metadata_deleted: bool,
    pub blob_deleted: bool,
    pub failures: Vec<DeleteFailure>,
}
