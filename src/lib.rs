//! PDF Document Search Service Library
//!
//! This library crate defines the core modules of the service. It serves as
//! the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`error`**: The shared error taxonomy. Every fallible operation maps
//!   onto one of its variants, which carry their own HTTP status codes.
//! - **`ingestion`**: The data intake pipeline. Accepts PDF uploads and URL
//!   fetches, extracts text (pages and lines), and feeds both stores.
//! - **`search`**: The information retrieval logic. Contains the tokenizer,
//!   whole-word line matching, frequency summaries and TF-IDF ranking.
//! - **`storage`**: The state layer. In-memory document metadata and blob
//!   stores with two-phase deletion.

pub mod error;
pub mod ingestion;
pub mod search;
pub mod storage;
