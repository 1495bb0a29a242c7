//! Search Service Module
//!
//! The core component answering user queries against the stored corpus.
//!
//! ## Overview
//! This module implements the information retrieval pipeline for the
//! service. Every operation works on a point-in-time snapshot taken from
//! the document store, so queries never observe a half-ingested document
//! and two concurrent queries never share state.
//!
//! ## Responsibilities
//! - **Tokenization**: Splitting text into word tokens and filtering stop
//!   words ahead of frequency counting.
//! - **Matching**: Whole-word, case-insensitive line search with an opt-in
//!   substring mode and occurrence counting.
//! - **Summarizing**: Per-document most-frequent-word summaries.
//! - **Ranking**: TF-IDF relevance scoring of the whole corpus per query.
//! - **API**: Exposing all of the above via HTTP query endpoints.
//!
//! ## Submodules
//! - **`tokenizer`**: Text splitting and the stop-word list.
//! - **`engine`**: Term matching and occurrence counting.
//! - **`frequency`**: Most-frequent-word summaries.
//! - **`ranking`**: The TF-IDF model and query ranking.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod frequency;
pub mod handlers;
pub mod ranking;
pub mod tokenizer;
pub mod types;
