//! Structural phrase extraction (experience durations, seniority, tech combos)

use once_cell::sync::Lazy;
use regex::Regex;

/// Matched phrases in pattern order; duplicates are kept.
pub type PhraseSet = Vec<String>;

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+\+?\s*years?\s+(?:of\s+)?(?:experience|work|background)",
        r"(?:experience|background)\s+(?:in|with|of)\s+\w+",
        r"(?:senior|junior|lead|principal)\s+\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid experience phrase pattern"))
    .collect()
});

static TECH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\w+\s+(?:development|programming|framework|platform)",
        r"(?:web|mobile|full[\-\s]?stack|backend|frontend)\s+\w+",
        r"\w+\s+(?:database|server|cloud|deployment)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid technology phrase pattern"))
    .collect()
});

/// Case-sensitive; callers pass normalized (lowercase) text.
pub fn extract_phrases(text: &str) -> PhraseSet {
    EXPERIENCE_PATTERNS
        .iter()
        .chain(TECH_PATTERNS.iter())
        .flat_map(|regex| regex.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}
