//! Document Storage Module
//!
//! In-memory persistence for ingested documents, split into two stores:
//! - **`documents`**: metadata records (id, stored file name, extracted
//!   lines, page and size counters).
//! - **`blobs`**: the original PDF bytes, keyed by the unique stored file
//!   name, so originals can be downloaded back.
//!
//! Both stores are DashMap-backed and shared across request handlers via
//! `Arc`. Deletion is two-phase: the metadata record and the stored original
//! are removed independently and each phase reports its own outcome, so a
//! blob failure never hides a successful metadata removal.

pub mod blobs;
pub mod documents;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
