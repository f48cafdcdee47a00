//! Text normalization and keyword frequency extraction

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Token -> occurrence count for one document.
pub type KeywordFrequency = HashMap<String, usize>;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "up", "about", "into", "through", "during", "before", "after",
        "above", "below", "between", "among", "within", "without", "upon", "this", "that",
        "these", "those", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "will", "would", "could", "should", "may", "might",
        "must", "can", "shall", "i", "you", "he", "she", "it", "we", "they", "me", "him",
        "her", "us", "them", "my", "your", "his", "our", "their",
    ]
    .into_iter()
    .collect()
});

/// Lowercase, turn every non-word character into a space, collapse whitespace.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = NON_WORD_RE.replace_all(&lowered, " ");
    WHITESPACE_RE.replace_all(&spaced, " ").trim().to_string()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Count whitespace tokens longer than two characters that are not stop words.
pub fn extract_keywords(normalized: &str) -> KeywordFrequency {
    let mut frequency = KeywordFrequency::new();

    for word in normalized.split_whitespace() {
        if word.chars().count() > 2 && !is_stop_word(word) {
            *frequency.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    frequency
}

/// Distinct whitespace-separated words of the lowercased text.
pub fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
