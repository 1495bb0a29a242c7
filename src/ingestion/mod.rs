//! Document Ingestion Module
//!
//! Turns uploaded or fetched PDFs into stored documents. Two entry points
//! feed the same pipeline:
//! 1. **Upload**: `POST /documents` accepts multipart file fields; every
//!    file is processed independently and reported per item.
//! 2. **Fetch**: `POST /ingest` downloads a single PDF by URL.
//!
//! The pipeline extracts text (page count plus non-blank trimmed lines),
//! stores the original bytes under a timestamped unique name, and only then
//! creates the metadata record.

pub mod extractor;
pub mod handlers;
pub mod types;
