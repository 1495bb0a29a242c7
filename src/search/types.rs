//! Search Data Types
//!
//! Query parameters live next to their handlers; this module holds the
//! result shapes shared between the engine, the ranking model and the API.

use serde::{Deserialize, Serialize};

/// Line matching mode. Whole-word is the default everywhere; substring
/// matching only happens when a request asks for it by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Word,
    Substring,
}

/// Matching lines of one document, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMatches {
    pub document_id: String,
    pub file_name: String,
    pub line_count: usize,
    pub lines: Vec<String>,
}

/// Response body for `GET /search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSearchResponse {
    pub term: String,
    pub mode: SearchMode,
    pub total_documents: usize,
    pub count: usize,
    pub results: Vec<DocumentMatches>,
}

/// Response body for `GET /documents/:id/search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSearchResponse {
    pub document_id: String,
    pub term: String,
    pub mode: SearchMode,
    pub line_count: usize,
    pub lines: Vec<String>,
}

/// Occurrence totals for one term in one document: every whole-word hit
/// counts towards `total`, and `lines` lists the lines holding at least one
/// hit, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceCount {
    pub total: usize,
    pub lines: Vec<String>,
}

/// Response body for `GET /documents/:id/occurrences`.
#[derive(Debug, Serialize, Deserialize)]
pub struct OccurrenceResponse {
    pub document_id: String,
    pub term: String,
    pub total: usize,
    pub line_count: usize,
    pub lines: Vec<String>,
}

/// One entry of a frequency summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Response body for `GET /documents/:id/top-words`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopWordsResponse {
    pub document_id: String,
    pub limit: usize,
    pub words: Vec<WordCount>,
}

/// One ranked corpus entry: a positive TF-IDF score and its 1-based rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedDocument {
    pub document_id: String,
    pub score: f64,
    pub rank: usize,
}

/// Response body for `GET /rank`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingResponse {
    pub query: String,
    pub corpus_size: usize,
    pub count: usize,
    pub results: Vec<RankedDocument>,
}
