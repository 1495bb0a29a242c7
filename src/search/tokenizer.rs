//! Tokenization and stop words.
//!
//! Tokens are maximal alphanumeric runs with their original casing kept, so
//! downstream consumers choose their own case handling: frequency summaries
//! count case-sensitively, ranking lowercases. Stop-word filtering is always
//! case-insensitive.

/// Common English stop words, kept sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "down", "during", "each", "few", "for", "from", "further",
    "had", "has", "have", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in",
    "into", "is", "it", "its", "just", "may", "me", "might", "more", "most", "must", "my",
    "need", "no", "not", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "they", "this", "through", "to", "too", "under",
    "until", "up", "us", "very", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "why", "will", "with", "would", "you", "your", "yours",
];

/// Splits text into word tokens: maximal alphanumeric runs, original casing
/// preserved, punctuation and whitespace discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Stop-word check, case-insensitive.
pub fn is_stop_word(token: &str) -> bool {
    let lowered = token.to_lowercase();
    STOP_WORDS.binary_search(&lowered.as_str()).is_ok()
}

/// Word tokens with stop words removed, casing still preserved.
pub fn significant_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| !is_stop_word(token))
        .collect()
}

#[cfg(test)]
pub(crate) fn stop_word_list() -> &'static [&'static str] {
    STOP_WORDS
}
