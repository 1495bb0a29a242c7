//! Ingestion HTTP Handlers
//!
//! Upload and fetch endpoints plus the shared pipeline they both feed.
//! Per-file failures during a multipart upload are reported item by item;
//! the fetch endpoint handles a single document and surfaces failures
//! through the error taxonomy directly.

use axum::extract::{Extension, Multipart};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use super::extractor;
use super::types::{FetchIngestResponse, FetchRequest, IngestOutcome, UploadResponse};
use crate::error::ServiceError;
use crate::storage::blobs::BlobStore;
use crate::storage::documents::DocumentStore;
use crate::storage::types::Document;

pub async fn handle_upload_documents(
    Extension(documents): Extension<Arc<DocumentStore>>,
    Extension(blobs): Extension<Arc<BlobStore>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ServiceError> {
    let mut items = Vec::new();

    while let Some(field) =
        multipart
            .next_field()
            .await
            .map_err(|e| ServiceError::Validation {
                message: format!("malformed multipart body: {}", e),
            })?
    {
        // Only file fields carry a document; plain form fields are ignored.
        let original_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!("Failed to read upload {}: {}", original_name, e);
                items.push(IngestOutcome::failure(
                    &original_name,
                    "upload_failed",
                    e.to_string(),
                ));
                continue;
            }
        };

        match ingest_document(&documents, &blobs, &original_name, bytes) {
            Ok(document) => {
                tracing::info!("Ingested {} as document {}", original_name, document.id);
                items.push(IngestOutcome::success(&original_name, document.summary()));
            }
            Err(e) => {
                tracing::warn!("Ingestion of {} failed: {}", original_name, e);
                items.push(IngestOutcome::failure(
                    &original_name,
                    failure_status(&e),
                    e.to_string(),
                ));
            }
        }
    }

    if items.is_empty() {
        return Err(ServiceError::Validation {
            message: "multipart body contained no files".to_string(),
        });
    }

    let ingested = items.iter().filter(|item| item.status == "ingested").count();
    let failed = items.len() - ingested;
    let status = if ingested > 0 {
        StatusCode::CREATED
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((
        status,
        Json(UploadResponse {
            ingested,
            failed,
            items,
        }),
    ))
}

pub async fn handle_ingest_url(
    Extension(documents): Extension<Arc<DocumentStore>>,
    Extension(blobs): Extension<Arc<BlobStore>>,
    Json(req): Json<FetchRequest>,
) -> Result<(StatusCode, Json<FetchIngestResponse>), ServiceError> {
    if req.url.trim().is_empty() {
        return Err(ServiceError::Validation {
            message: "url must not be empty".to_string(),
        });
    }

    let bytes = fetch_remote_document(&req.url).await?;
    let original_name = file_name_from_url(&req.url);
    let document = ingest_document(&documents, &blobs, &original_name, bytes)?;

    tracing::info!("Ingested document {} from {}", document.id, req.url);
    Ok((
        StatusCode::CREATED,
        Json(FetchIngestResponse {
            source_url: req.url,
            status: "ingested".to_string(),
            document: document.summary(),
        }),
    ))
}

/// Shared pipeline: extract text, assemble the record, store the original
/// bytes first and the metadata record second so a storage refusal leaves
/// no half-ingested document behind.
pub fn ingest_document(
    documents: &DocumentStore,
    blobs: &BlobStore,
    original_name: &str,
    bytes: Vec<u8>,
) -> Result<Document, ServiceError> {
    let extracted = extractor::extract(&bytes)?;
    let document = Document::new(
        original_name,
        extracted.page_count,
        extracted.lines,
        bytes.len(),
    );

    blobs.put(&document.file_name, bytes)?;
    documents.create(document.clone());
    Ok(document)
}

async fn fetch_remote_document(url: &str) -> Result<Vec<u8>, ServiceError> {
    let response = reqwest::get(url).await.map_err(|e| ServiceError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(ServiceError::Fetch {
            url: url.to_string(),
            message: format!("unexpected status {}", response.status()),
        });
    }

    let bytes = response.bytes().await.map_err(|e| ServiceError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    Ok(bytes.to_vec())
}

/// Derives the original file name from the last URL path segment, with
/// query and fragment stripped. Falls back to a generic name when the URL
/// ends in a bare host or slash.
pub(crate) fn file_name_from_url(url: &str) -> String {
    let candidate = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let candidate = candidate.split(['?', '#']).next().unwrap_or_default();

    if candidate.is_empty() || candidate.contains(':') {
        "document.pdf".to_string()
    } else {
        candidate.to_string()
    }
}

fn failure_status(error: &ServiceError) -> &'static str {
    match error {
        ServiceError::Extraction { .. } => "extraction_failed",
        ServiceError::Storage { .. } => "storage_failed",
        _ => "ingestion_failed",
    }
}
