//! Best-effort candidate name heuristics

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

pub const UNKNOWN_NAME: &str = "Unknown";

const HEADER_LINES: usize = 15;
const PATTERN_WINDOW_CHARS: usize = 500;

const CONTACT_WORDS: &[&str] = &[
    "email", "phone", "contact", "objective", "summary", "address", "linkedin", "github",
];

/// Resume section and job-title words that disqualify a candidate string.
const NAME_BLACKLIST: &[&str] = &[
    "RESUME", "PORTFOLIO", "PROFILE", "CONTACT", "EMAIL", "PHONE",
    "ADDRESS", "OBJECTIVE", "SUMMARY", "EXPERIENCE", "EDUCATION",
    "SKILLS", "PROJECTS", "CERTIFICATIONS", "REFERENCES", "OVERVIEW",
    "SOFTWARE", "DEVELOPER", "ENGINEER", "ANALYST", "MANAGER",
    "CONSULTANT", "ARCHITECT", "SPECIALIST",
    "PYTHON", "JAVA", "SQL", "DATA", "POWER", "TITLE", "POSITION",
    "LINKEDIN", "GITHUB", "YEARS", "MONTHS", "PAGE", "DOCUMENT",
];

static NON_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\-'.]").expect("valid name filter regex"));

static LONG_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3,}").expect("valid digit regex"));

static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // before an email address or phone number
        r"^([A-Z][a-z]+\s+[A-Z][a-z]+)\s*[\n\|\-\,]?\s*(?:[a-zA-Z0-9._%+-]+@|\+?\d)",
        // at the very start of a line
        r"^\s*([A-Z][a-z]{2,}\s+[A-Z][a-z]{2,})",
        // before a contact delimiter
        r"([A-Z][a-z]+\s+[A-Z][a-z]+)\s*[\|\-]\s*(?:email|phone|contact)",
        // before a location
        r"([A-Z][a-z]+\s+[A-Z][a-z]+)\s*[\n,]\s*(?:[A-Z][a-z]+,\s*[A-Z]{2}|Hyderabad|Bangalore|Mumbai|Delhi)",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?m){}", p)).expect("valid name pattern"))
    .collect()
});

static FILENAME_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(resume|cv|portfolio)[\s\-_]*").expect("valid filename regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\-_]+").expect("valid separator regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static TRAILING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\d+\s*$").expect("valid trailing number regex"));

/// Capitalise the first letter of every alphabetic run and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().map_or(false, char::is_uppercase)
}

fn is_alphabetic_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Strict check used on text-derived candidates: 2-4 capitalised
/// alphabetic words, none of them a resume section or role keyword.
pub fn is_valid_name(name: &str) -> bool {
    if name.chars().count() < 3 {
        return false;
    }

    let upper = name.to_uppercase();
    if NAME_BLACKLIST.iter().any(|keyword| upper.contains(keyword)) {
        return false;
    }

    if name.contains('@') || LONG_DIGIT_RUN.is_match(name) {
        return false;
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }

    words.iter().all(|word| {
        let clean: String = word.chars().filter(|c| !matches!(c, '-' | '\'' | '.')).collect();
        let len = clean.chars().count();
        is_alphabetic_word(&clean) && (2..=20).contains(&len) && starts_uppercase(word)
    })
}

/// Looser check used for filename-derived candidates.
pub fn is_valid_name_simple(name: &str) -> bool {
    if name.chars().count() < 2 {
        return false;
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if !(1..=3).contains(&words.len()) {
        return false;
    }

    words.iter().all(|word| {
        let clean: String = word.chars().filter(|c| !matches!(c, '-' | '\'')).collect();
        is_alphabetic_word(&clean) && (2..=20).contains(&word.chars().count())
    })
}

fn from_split_header(lines: &[&str]) -> Option<String> {
    let first = NON_NAME_CHARS.replace_all(lines[0].trim(), "").trim().to_string();
    let second = NON_NAME_CHARS.replace_all(lines[1].trim(), "").trim().to_string();

    if first.is_empty() || second.is_empty() {
        return None;
    }

    let first_words: Vec<&str> = first.split_whitespace().collect();
    let second_words: Vec<&str> = second.split_whitespace().collect();
    if first_words.len() > 2 || second_words.len() > 2 {
        return None;
    }
    if !starts_uppercase(&first) || !starts_uppercase(&second) {
        return None;
    }
    let mentions_contact = first_words
        .iter()
        .chain(second_words.iter())
        .any(|w| CONTACT_WORDS.contains(&w.to_lowercase().as_str()));
    if mentions_contact {
        return None;
    }

    let combined = format!("{} {}", first, second);
    if is_valid_name(&combined) {
        return Some(title_case(&combined));
    }
    if first_words.len() == 1 && is_valid_name_simple(&second) {
        return Some(title_case(&combined));
    }
    None
}

fn from_first_line(line: &str) -> Option<String> {
    let clean = NON_NAME_CHARS.replace_all(line, " ");
    let words: Vec<&str> = clean.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }
    let candidate = format!("{} {}", words[0], words[1]);
    is_valid_name(&candidate).then(|| title_case(&candidate))
}

fn from_patterns(text: &str) -> Option<String> {
    let window: String = text.chars().take(PATTERN_WINDOW_CHARS).collect();
    for pattern in NAME_PATTERNS.iter() {
        for caps in pattern.captures_iter(&window) {
            let name = caps[1].trim();
            if is_valid_name(name) {
                return Some(title_case(name));
            }
        }
    }
    None
}

/// Candidate name from resume text, or `"Unknown"`.
///
/// Tries a name wrapped across the first two lines, then the first two
/// words of the first line, then a few layout patterns over the start of
/// the document.
pub fn extract_candidate_name(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').take(HEADER_LINES).collect();

    if lines.len() >= 2 {
        if let Some(name) = from_split_header(&lines) {
            return name;
        }
    }

    if let Some(first) = lines.first() {
        if let Some(name) = from_first_line(first) {
            return name;
        }
    }

    from_patterns(text).unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Derive a name from a file name such as `john_smith_resume.pdf`.
pub fn name_from_filename(path: &Path) -> String {
    let stem = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => stem,
        _ => return UNKNOWN_NAME.to_string(),
    };

    let cleaned = FILENAME_NOISE.replace_all(stem, "");
    let cleaned = SEPARATORS.replace_all(&cleaned, " ");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = TRAILING_NUMBER.replace(cleaned.trim(), "");

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    match words.len() {
        0 => UNKNOWN_NAME.to_string(),
        1 if words[0].chars().count() > 2 => title_case(words[0]),
        1 => UNKNOWN_NAME.to_string(),
        _ => {
            let candidate = words[..2].join(" ");
            if is_valid_name_simple(&candidate) {
                title_case(&candidate)
            } else {
                UNKNOWN_NAME.to_string()
            }
        }
    }
}
