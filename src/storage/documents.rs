//! Document Metadata Store
//!
//! Thread-safe in-memory store of [`Document`] records keyed by id. Every
//! read hands out a clone, so callers always work on a point-in-time
//! snapshot and never hold a lock across an operation.

use dashmap::DashMap;

use super::types::{Document, DocumentSummary};
use crate::error::ServiceError;

#[derive(Default)]
pub struct DocumentStore {
    records: DashMap<String, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Inserts a record and returns its id.
    pub fn create(&self, document: Document) -> String {
        let id = document.id.clone();
        self.records.insert(id.clone(), document);
        id
    }

    /// Point read; `None` when the id is unknown.
    pub fn get(&self, id: &str) -> Option<Document> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    /// Fetch-or-fail read. Per-document operations call this first so an
    /// unknown id stops the operation before any work happens.
    pub fn fetch(&self, id: &str) -> Result<Document, ServiceError> {
        self.get(id).ok_or_else(|| ServiceError::NotFound {
            id: id.to_string(),
        })
    }

    /// Removes a record, returning it so callers still know the stored file
    /// name of the original.
    pub fn delete(&self, id: &str) -> Result<Document, ServiceError> {
        self.records
            .remove(id)
            .map(|(_, document)| document)
            .ok_or_else(|| ServiceError::NotFound {
                id: id.to_string(),
            })
    }

    /// Snapshot of every record, ordered by creation time then id so
    /// repeated listings of the same store come back in the same order.
    pub fn list_all(&self) -> Vec<Document> {
        let mut documents: Vec<Document> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        documents
    }

    /// Listing view of the snapshot, without the extracted lines.
    pub fn list_summaries(&self) -> Vec<DocumentSummary> {
        self.list_all().iter().map(Document::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
