//! TF-IDF Relevance Ranking
//!
//! Scores every stored document against a query and returns the positive
//! scorers in rank order. The model is rebuilt from the corpus snapshot on
//! every query; nothing is cached between requests, so a ranking always
//! reflects the store as it was at that instant.
//!
//! Weights: `tf` is the raw count of a term in a document and
//! `idf = 1 + ln(N / (1 + df))` with `N` the corpus size and `df` the number
//! of documents containing the term. A document scores the sum of `tf * idf`
//! over the query terms; documents scoring zero or less are dropped before
//! ranks are assigned.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::tokenizer::tokenize;
use super::types::RankedDocument;
use crate::error::ServiceError;
use crate::storage::types::Document;

/// Term statistics of one corpus snapshot.
pub struct TfIdfModel {
    corpus_size: usize,
    bags: Vec<TermBag>,
}

struct TermBag {
    document_id: String,
    counts: HashMap<String, usize>,
}

impl TfIdfModel {
    /// Builds the term bags for a snapshot. Terms are lowercased so queries
    /// are case-insensitive. Stop words keep their counts; the idf weighting
    /// already discounts terms that appear everywhere.
    pub fn build(documents: &[Document]) -> Self {
        let bags = documents
            .iter()
            .map(|document| {
                let mut counts: HashMap<String, usize> = HashMap::new();
                for token in tokenize(&document.full_text()) {
                    *counts.entry(token.to_lowercase()).or_insert(0) += 1;
                }
                TermBag {
                    document_id: document.id.clone(),
                    counts,
                }
            })
            .collect();

        Self {
            corpus_size: documents.len(),
            bags,
        }
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of documents containing the term.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.bags
            .iter()
            .filter(|bag| bag.counts.contains_key(term))
            .count()
    }

    /// Smoothed inverse document frequency: `1 + ln(N / (1 + df))`. Stays
    /// positive even for terms present in every document, so only documents
    /// containing none of the query terms can score zero.
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        if self.corpus_size == 0 {
            return 0.0;
        }
        let df = self.document_frequency(term) as f64;
        1.0 + (self.corpus_size as f64 / (1.0 + df)).ln()
    }

    /// Scores every document against the query terms, unfiltered and in
    /// snapshot order. Repeated query terms contribute once per repetition.
    pub fn score_all(&self, terms: &[String]) -> Vec<(String, f64)> {
        let mut weights: HashMap<&str, f64> = HashMap::new();
        for term in terms {
            weights
                .entry(term.as_str())
                .or_insert_with(|| self.inverse_document_frequency(term));
        }

        self.bags
            .iter()
            .map(|bag| {
                let score = terms
                    .iter()
                    .map(|term| {
                        let tf = bag.counts.get(term.as_str()).copied().unwrap_or(0) as f64;
                        tf * weights[term.as_str()]
                    })
                    .sum();
                (bag.document_id.clone(), score)
            })
            .collect()
    }
}

/// Lowercased word tokens of a query. Duplicates are kept.
pub fn query_terms(query: &str) -> Vec<String> {
    tokenize(query)
        .into_iter()
        .map(|token| token.to_lowercase())
        .collect()
}

/// Ranks a corpus snapshot against a query. Results are ordered by score
/// descending with document-id ascending as the tie-break, then numbered
/// with contiguous 1-based ranks.
pub fn rank_by_query(
    documents: &[Document],
    query: &str,
) -> Result<Vec<RankedDocument>, ServiceError> {
    if query.trim().is_empty() {
        return Err(ServiceError::Validation {
            message: "query must not be empty".to_string(),
        });
    }

    let terms = query_terms(query);
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let model = TfIdfModel::build(documents);
    let mut scored: Vec<(String, f64)> = model
        .score_all(&terms)
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(index, (document_id, score))| RankedDocument {
            document_id,
            score,
            rank: index + 1,
        })
        .collect())
}
