//! Word Frequency Summarizer
//!
//! Picks the most frequent significant words of one document. Stop words
//! are filtered before counting; counting itself is case-sensitive, so
//! "Rust" and "rust" stay separate entries. Ties keep first-appearance
//! order, which makes repeated summaries of the same document identical.

use std::collections::HashMap;

use super::tokenizer::significant_words;
use super::types::WordCount;
use crate::storage::types::Document;

pub const DEFAULT_TOP_WORDS: usize = 5;

pub fn top_words(document: &Document, limit: usize) -> Vec<WordCount> {
    let words = significant_words(&document.full_text());

    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, word) in words.into_iter().enumerate() {
        let entry = counts.entry(word).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(word, count, _)| WordCount { word, count })
        .collect()
}
