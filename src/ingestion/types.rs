//! Ingestion Data Types
//!
//! Request and response bodies for the upload and fetch endpoints.

use serde::{Deserialize, Serialize};

use crate::storage::types::DocumentSummary;

/// Request body for `POST /ingest`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FetchRequest {
    pub url: String,
}

/// Per-file outcome of an ingestion attempt. One failing file never hides
/// the outcome of the others.
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestOutcome {
    /// The client-supplied file name, before the stored name is derived.
    pub file_name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IngestOutcome {
    pub fn success(original_name: &str, document: DocumentSummary) -> Self {
        Self {
            file_name: original_name.to_string(),
            status: "ingested".to_string(),
            document: Some(document),
            error: None,
        }
    }

    pub fn failure(original_name: &str, status: &str, error: String) -> Self {
        Self {
            file_name: original_name.to_string(),
            status: status.to_string(),
            document: None,
            error: Some(error),
        }
    }
}

/// Response body for `POST /documents` (multipart upload).
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub ingested: usize,
    pub failed: usize,
    pub items: Vec<IngestOutcome>,
}

/// Response body for `POST /ingest` (fetch by URL).
#[derive(Debug, Serialize, Deserialize)]
pub struct FetchIngestResponse {
    pub source_url: String,
    pub status: String,
    pub document: DocumentSummary,
}
