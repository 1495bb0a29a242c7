//! Storage Module Tests
//!
//! ## Test Scopes
//! - **Document Model**: record construction, stored-name derivation, size
//!   rounding, summary projection.
//! - **Document Store**: create/get/delete round-trips, fetch-or-fail,
//!   snapshot ordering.
//! - **Blob Store**: round-trips, name uniqueness, removal reporting.
//! - **Two-Phase Delete**: full success, partial success, unknown id.

#[cfg(test)]
mod tests {
    use crate::error::ServiceError;
    use crate::storage::blobs::BlobStore;
    use crate::storage::documents::DocumentStore;
    use crate::storage::handlers::delete_document;
    use crate::storage::types::{Document, size_in_kb};

    fn sample_document(name: &str, lines: &[&str]) -> Document {
        Document::new(name, 1, lines.iter().map(|s| s.to_string()).collect(), 2048)
    }

    // ============================================================
    // TEST GROUP 1: Document model
    // ============================================================

    #[test]
    fn test_document_new_populates_identity_fields() {
        let doc = sample_document("report.pdf", &["alpha", "beta"]);

        assert!(!doc.id.is_empty());
        assert!(doc.created_at > 0);
        assert_eq!(doc.file_name, format!("{}-report.pdf", doc.created_at));
        assert_eq!(doc.page_count, 1);
        assert_eq!(doc.lines, vec!["alpha", "beta"]);
        assert_eq!(doc.size_kb, 2.0);
    }

    #[test]
    fn test_document_ids_are_unique() {
        let a = sample_document("a.pdf", &[]);
        let b = sample_document("a.pdf", &[]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_size_in_kb_rounds_to_two_decimals() {
        assert_eq!(size_in_kb(0), 0.0);
        assert_eq!(size_in_kb(1536), 1.5);
        assert_eq!(size_in_kb(2048), 2.0);
        // 1000 bytes = 0.9765625 KB, rounded up at the second decimal
        assert_eq!(size_in_kb(1000), 0.98);
    }

    #[test]
    fn test_full_text_joins_lines_with_single_spaces() {
        let doc = sample_document("t.pdf", &["The cat sat.", "The cat ran."]);
        assert_eq!(doc.full_text(), "The cat sat. The cat ran.");
    }

    #[test]
    fn test_summary_drops_lines_but_counts_them() {
        let doc = sample_document("t.pdf", &["one", "two", "three"]);
        let summary = doc.summary();

        assert_eq!(summary.id, doc.id);
        assert_eq!(summary.file_name, doc.file_name);
        assert_eq!(summary.created_at, doc.created_at);
        assert_eq!(summary.page_count, doc.page_count);
        assert_eq!(summary.line_count, 3);
        assert_eq!(summary.size_kb, doc.size_kb);
    }

    // ============================================================
    // TEST GROUP 2: Document store
    // ============================================================

    #[test]
    fn test_create_then_get_round_trips() {
        let store = DocumentStore::new();
        let doc = sample_document("r.pdf", &["line"]);
        let id = store.create(doc.clone());

        assert_eq!(id, doc.id);
        assert_eq!(store.len(), 1);

        let fetched = store.get(&id).unwrap();
        assert_eq!(fetched.file_name, doc.file_name);
        assert_eq!(fetched.lines, doc.lines);
    }

    #[test]
    fn test_fetch_unknown_id_is_not_found() {
        let store = DocumentStore::new();
        let err = store.fetch("missing").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[test]
    fn test_list_all_orders_by_creation_time_then_id() {
        let store = DocumentStore::new();

        let mut first = sample_document("a.pdf", &[]);
        first.created_at = 100;
        first.id = "bbb".to_string();
        let mut second = sample_document("b.pdf", &[]);
        second.created_at = 100;
        second.id = "aaa".to_string();
        let mut third = sample_document("c.pdf", &[]);
        third.created_at = 50;
        third.id = "zzz".to_string();

        store.create(first);
        store.create(second);
        store.create(third);

        let ids: Vec<String> = store.list_all().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["zzz", "aaa", "bbb"]);
    }

    #[test]
    fn test_delete_returns_the_removed_record() {
        let store = DocumentStore::new();
        let doc = sample_document("r.pdf", &[]);
        let file_name = doc.file_name.clone();
        let id = store.create(doc);

        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.file_name, file_name);
        assert!(store.is_empty());
        assert!(matches!(
            store.delete(&id),
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_summaries_matches_snapshot_order() {
        let store = DocumentStore::new();
        store.create(sample_document("a.pdf", &["x"]));
        store.create(sample_document("b.pdf", &["y", "z"]));

        let documents = store.list_all();
        let summaries = store.list_summaries();

        assert_eq!(documents.len(), summaries.len());
        for (doc, summary) in documents.iter().zip(summaries.iter()) {
            assert_eq!(doc.id, summary.id);
            assert_eq!(doc.lines.len(), summary.line_count);
        }
    }

    // ============================================================
    // TEST GROUP 3: Blob store
    // ============================================================

    #[test]
    fn test_blob_put_get_round_trips() {
        let blobs = BlobStore::new();
        blobs.put("123-a.pdf", vec![1, 2, 3]).unwrap();

        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs.get("123-a.pdf").unwrap(), vec![1, 2, 3]);
        assert!(blobs.get("456-b.pdf").is_none());
    }

    #[test]
    fn test_blob_put_rejects_duplicate_names() {
        let blobs = BlobStore::new();
        blobs.put("123-a.pdf", vec![1]).unwrap();

        let err = blobs.put("123-a.pdf", vec![2]).unwrap_err();
        assert!(matches!(err, ServiceError::Storage { .. }));
        // The original bytes survive the refused overwrite
        assert_eq!(blobs.get("123-a.pdf").unwrap(), vec![1]);
    }

    #[test]
    fn test_blob_delete_unknown_name_is_not_found() {
        let blobs = BlobStore::new();
        assert!(matches!(
            blobs.delete("nope.pdf"),
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_blob_list_returns_sorted_names() {
        let blobs = BlobStore::new();
        blobs.put("200-b.pdf", vec![2]).unwrap();
        blobs.put("100-a.pdf", vec![1]).unwrap();

        assert_eq!(blobs.list(), vec!["100-a.pdf", "200-b.pdf"]);
    }

    // ============================================================
    // TEST GROUP 4: Two-phase delete
    // ============================================================

    #[test]
    fn test_delete_document_removes_metadata_and_blob() {
        let documents = DocumentStore::new();
        let blobs = BlobStore::new();

        let doc = sample_document("r.pdf", &["line"]);
        blobs.put(&doc.file_name, vec![0u8; 16]).unwrap();
        let id = documents.create(doc);

        let report = delete_document(&documents, &blobs, &id).unwrap();

        assert_eq!(report.document_id, id);
        assert!(report.metadata_deleted);
        assert!(report.blob_deleted);
        assert!(report.failures.is_empty());
        assert!(documents.is_empty());
        assert!(blobs.is_empty());
    }

    #[test]
    fn test_delete_document_reports_missing_blob_as_partial() {
        let documents = DocumentStore::new();
        let blobs = BlobStore::new();

        // Metadata only: the blob phase has nothing to remove
        let id = documents.create(sample_document("r.pdf", &[]));

        let report = delete_document(&documents, &blobs, &id).unwrap();

        assert!(report.metadata_deleted);
        assert!(!report.blob_deleted);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].phase, "blob");
        assert!(documents.is_empty());
    }

    #[test]
    fn test_delete_document_unknown_id_fails_before_any_removal() {
        let documents = DocumentStore::new();
        let blobs = BlobStore::new();

        let doc = sample_document("keep.pdf", &[]);
        blobs.put(&doc.file_name, vec![7]).unwrap();
        documents.create(doc);

        let err = delete_document(&documents, &blobs, "unknown").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert_eq!(documents.len(), 1);
        assert_eq!(blobs.len(), 1);
    }
}
