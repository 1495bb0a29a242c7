//! Document Storage HTTP Handlers
//!
//! Read and delete surface over the stores: listing, metadata lookup,
//! original download and two-phase deletion.

use axum::{
    Json,
    extract::{Extension, Path},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use super::blobs::BlobStore;
use super::documents::DocumentStore;
use super::types::{DeleteFailure, DeleteReport, Document, DocumentListResponse};
use crate::error::ServiceError;

pub async fn handle_list_documents(
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Json<DocumentListResponse> {
    let summaries = documents.list_summaries();
    Json(DocumentListResponse {
        total: summaries.len(),
        documents: summaries,
    })
}

pub async fn handle_get_document(
    Extension(documents): Extension<Arc<DocumentStore>>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ServiceError> {
    let document = documents.fetch(&id)?;
    Ok(Json(document))
}

/// Streams the stored original back. Metadata without a matching blob is a
/// store inconsistency and reported as such, not as a missing document.
pub async fn handle_download_document(
    Extension(documents): Extension<Arc<DocumentStore>>,
    Extension(blobs): Extension<Arc<BlobStore>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let document = documents.fetch(&id)?;
    let bytes = blobs
        .get(&document.file_name)
        .ok_or_else(|| ServiceError::Storage {
            message: format!("original bytes missing for {}", document.file_name),
        })?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.file_name),
        ),
    ];
    Ok((headers, bytes))
}

pub async fn handle_delete_document(
    Extension(documents): Extension<Arc<DocumentStore>>,
    Extension(blobs): Extension<Arc<BlobStore>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReport>, ServiceError> {
    let report = delete_document(&documents, &blobs, &id)?;
    Ok(Json(report))
}

/// Two-phase delete. The record must exist up front; after that the metadata
/// and blob removals each run to completion and report their own outcome, so
/// a missing blob never rolls back the metadata removal.
pub fn delete_document(
    documents: &DocumentStore,
    blobs: &BlobStore,
    id: &str,
) -> Result<DeleteReport, ServiceError> {
    let record = documents.fetch(id)?;

    let mut failures = Vec::new();

    let metadata_deleted = match documents.delete(id) {
        Ok(_) => true,
        Err(e) => {
            failures.push(DeleteFailure {
                phase: "metadata".to_string(),
                error: e.to_string(),
            });
            false
        }
    };

    let blob_deleted = match blobs.delete(&record.file_name) {
        Ok(()) => true,
        Err(e) => {
            failures.push(DeleteFailure {
                phase: "blob".to_string(),
                error: e.to_string(),
            });
            false
        }
    };

    if failures.is_empty() {
        tracing::info!("Deleted document {} ({})", id, record.file_name);
    } else {
        tracing::warn!(
            "Partial delete for document {}: {} phase(s) failed",
            id,
            failures.len()
        );
    }

    Ok(DeleteReport {
        document_id: id.to_string(),
        metadata_deleted,
        blob_deleted,
        failures,
    })
}
