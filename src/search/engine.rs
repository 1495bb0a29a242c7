//! Keyword Search Engine
//!
//! Line-oriented lexical matching over document snapshots. The default mode
//! matches whole words case-insensitively via a word-boundary regex built
//! from the escaped term; substring mode lowercases both sides and matches
//! anywhere inside a line.

use regex::Regex;

use super::types::{DocumentMatches, OccurrenceCount, SearchMode};
use crate::error::ServiceError;
use crate::storage::types::Document;

/// Compiled matcher for one search term. Built once per operation and
/// applied to every line of the snapshot.
pub enum TermMatcher {
    Word(Regex),
    Substring(String),
}

impl TermMatcher {
    /// Compiles a matcher for the term. The term is escaped first, so regex
    /// metacharacters in user input always match literally.
    pub fn compile(term: &str, mode: SearchMode) -> Result<Self, ServiceError> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::Validation {
                message: "search term must not be empty".to_string(),
            });
        }

        match mode {
            SearchMode::Word => {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(trimmed));
                let regex = Regex::new(&pattern).map_err(|e| ServiceError::Validation {
                    message: format!("unusable search term: {}", e),
                })?;
                Ok(TermMatcher::Word(regex))
            }
            SearchMode::Substring => Ok(TermMatcher::Substring(trimmed.to_lowercase())),
        }
    }

    pub fn matches_line(&self, line: &str) -> bool {
        match self {
            TermMatcher::Word(regex) => regex.is_match(line),
            TermMatcher::Substring(needle) => line.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Non-overlapping hits inside one line.
    pub fn count_in_line(&self, line: &str) -> usize {
        match self {
            TermMatcher::Word(regex) => regex.find_iter(line).count(),
            TermMatcher::Substring(needle) => line.to_lowercase().matches(needle.as_str()).count(),
        }
    }
}

/// Lines of one document matching the term, in document order.
pub fn matching_lines(document: &Document, matcher: &TermMatcher) -> Vec<String> {
    document
        .lines
        .iter()
        .filter(|line| matcher.matches_line(line))
        .cloned()
        .collect()
}

/// Searches a corpus snapshot. Documents without a single hit are left out;
/// the rest keep snapshot order.
pub fn search_word(
    documents: &[Document],
    term: &str,
    mode: SearchMode,
) -> Result<Vec<DocumentMatches>, ServiceError> {
    let matcher = TermMatcher::compile(term, mode)?;

    let mut results = Vec::new();
    for document in documents {
        let lines = matching_lines(document, &matcher);
        if lines.is_empty() {
            continue;
        }
        results.push(DocumentMatches {
            document_id: document.id.clone(),
            file_name: document.file_name.clone(),
            line_count: lines.len(),
            lines,
        });
    }
    Ok(results)
}

/// Total whole-word occurrences of the term in one document, together with
/// the lines containing it. A line holding the term three times contributes
/// three to the total and appears once in the line list.
pub fn count_occurrences(
    document: &Document,
    term: &str,
) -> Result<OccurrenceCount, ServiceError> {
    let matcher = TermMatcher::compile(term, SearchMode::Word)?;

    let mut total = 0;
    let mut lines = Vec::new();
    for line in &document.lines {
        let hits = matcher.count_in_line(line);
        if hits > 0 {
            total += hits;
            lines.push(line.clone());
        }
    }

    Ok(OccurrenceCount { total, lines })
}
