//! Search HTTP Handlers
//!
//! Query endpoints over the document store. Every handler takes its own
//! snapshot via the store, so concurrent ingestion only shifts which
//! snapshot a query sees, never its internals.

use axum::Json;
use axum::extract::{Extension, Path, Query};
use serde::Deserialize;
use std::sync::Arc;

use super::engine::{self, TermMatcher};
use super::frequency::{self, DEFAULT_TOP_WORDS};
use super::ranking;
use super::types::{
    DocumentMatches, DocumentSearchResponse, OccurrenceResponse, RankingResponse, SearchMode,
    TopWordsResponse, WordSearchResponse,
};
use crate::error::ServiceError;
use crate::storage::documents::DocumentStore;

#[derive(Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
    pub mode: Option<SearchMode>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Deserialize)]
pub struct OccurrenceParams {
    pub term: Option<String>,
}

#[derive(Deserialize)]
pub struct TopWordsParams {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct RankParams {
    pub query: Option<String>,
}

pub async fn handle_search_all(
    Query(params): Query<SearchParams>,
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Result<Json<WordSearchResponse>, ServiceError> {
    let term = require_param(params.term, "term")?;
    let mode = params.mode.unwrap_or_default();

    let corpus = documents.list_all();
    let results = engine::search_word(&corpus, &term, mode)?;

    let limit = params.limit.unwrap_or(10);
    let offset = params.offset.unwrap_or(0);
    let total_documents = results.len();
    let results: Vec<DocumentMatches> = results.into_iter().skip(offset).take(limit).collect();

    Ok(Json(WordSearchResponse {
        term,
        mode,
        total_documents,
        count: results.len(),
        results,
    }))
}

pub async fn handle_search_document(
    Path(id): Path<String>,
    Query(params): Query<SearchParams>,
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Result<Json<DocumentSearchResponse>, ServiceError> {
    let term = require_param(params.term, "term")?;
    let mode = params.mode.unwrap_or_default();

    let document = documents.fetch(&id)?;
    let matcher = TermMatcher::compile(&term, mode)?;
    let lines = engine::matching_lines(&document, &matcher);

    Ok(Json(DocumentSearchResponse {
        document_id: document.id,
        term,
        mode,
        line_count: lines.len(),
        lines,
    }))
}

pub async fn handle_occurrences(
    Path(id): Path<String>,
    Query(params): Query<OccurrenceParams>,
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Result<Json<OccurrenceResponse>, ServiceError> {
    let term = require_param(params.term, "term")?;

    let document = documents.fetch(&id)?;
    let count = engine::count_occurrences(&document, &term)?;

    Ok(Json(OccurrenceResponse {
        document_id: document.id,
        term,
        total: count.total,
        line_count: count.lines.len(),
        lines: count.lines,
    }))
}

pub async fn handle_top_words(
    Path(id): Path<String>,
    Query(params): Query<TopWordsParams>,
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Result<Json<TopWordsResponse>, ServiceError> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_WORDS);

    let document = documents.fetch(&id)?;
    let words = frequency::top_words(&document, limit);

    Ok(Json(TopWordsResponse {
        document_id: document.id,
        limit,
        words,
    }))
}

pub async fn handle_rank(
    Query(params): Query<RankParams>,
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Result<Json<RankingResponse>, ServiceError> {
    let query = require_param(params.query, "query")?;

    let corpus = documents.list_all();
    let results = ranking::rank_by_query(&corpus, &query)?;

    Ok(Json(RankingResponse {
        query,
        corpus_size: corpus.len(),
        count: results.len(),
        results,
    }))
}

fn require_param(value: Option<String>, name: &str) -> Result<String, ServiceError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ServiceError::Validation {
            message: format!("query parameter '{}' must not be empty", name),
        }),
    }
}
