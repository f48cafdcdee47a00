//! Technical skill extraction against a fixed vocabulary

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Canonical skill tokens (internal whitespace removed), kept sorted.
pub type SkillSet = BTreeSet<String>;

/// One alternation per category; applied in order.
const SKILL_PATTERNS: &[&str] = &[
    // Programming languages
    r"\b(?:python|java|javascript|typescript|c\+\+|c#|php|ruby|swift|kotlin|go|rust|scala|r)\b",
    // Web frameworks
    r"\b(?:react|angular|vue|node\.?js|express|django|flask|spring|laravel|fastapi|next\.?js)\b",
    // Databases
    r"\b(?:sql|mysql|postgresql|postgres|mongodb|redis|elasticsearch|oracle|sql\s*server|dynamodb|cassandra)\b",
    // Cloud & DevOps
    r"\b(?:aws|azure|gcp|google\s*cloud|docker|kubernetes|k8s|jenkins|gitlab|github|ci/cd|terraform|ansible)\b",
    // AI/ML
    r"\b(?:machine\s*learning|deep\s*learning|ai|artificial\s*intelligence|data\s*science|analytics|nlp|computer\s*vision)\b",
    r"\b(?:tensorflow|pytorch|scikit-learn|pandas|numpy|keras|spark|hadoop)\b",
    // Web technologies
    r"\b(?:html5?|css3?|bootstrap|tailwind|sass|scss|less|webpack|babel)\b",
    // Methodologies & tools
    r"\b(?:agile|scrum|devops|microservices|rest\s*api|restful|graphql|git|jira)\b",
    // Other technologies
    r"\b(?:linux|unix|bash|powershell|api|json|xml|yaml|rabbitmq|kafka|celery)\b",
];

/// Checked by plain substring containment after the category patterns.
pub const MULTI_WORD_SKILLS: &[&str] = &[
    "machine learning",
    "deep learning",
    "data science",
    "computer vision",
    "natural language processing",
    "rest api",
    "restful api",
    "web development",
    "full stack",
    "front end",
    "back end",
    "cloud computing",
    "problem solving",
    "team leadership",
    "project management",
    "technical architecture",
];

static SKILL_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    SKILL_PATTERNS
        .iter()
        .map(|pattern| Regex::new(&format!("(?i){}", pattern)).expect("Invalid skill pattern"))
        .collect()
});

static MULTI_WORD_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::Standard)
        .build(MULTI_WORD_SKILLS)
        .expect("Failed to build multi-word skill matcher")
});

/// Strip all whitespace so "machine learning" and "machinelearning" collide.
pub fn canonical_skill(raw: &str) -> String {
    raw.split_whitespace().collect()
}

/// Extract canonical skill tokens from normalized text.
pub fn extract_skills(normalized: &str) -> SkillSet {
    let text = normalized.to_lowercase();
    let mut skills = SkillSet::new();

    for regex in SKILL_REGEXES.iter() {
        for found in regex.find_iter(&text) {
            skills.insert(canonical_skill(found.as_str()));
        }
    }

    for found in MULTI_WORD_MATCHER.find_overlapping_iter(&text) {
        skills.insert(canonical_skill(MULTI_WORD_SKILLS[found.pattern().as_usize()]));
    }

    skills
}
