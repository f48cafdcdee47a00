//! Experience signals: years of experience, seniority, job-history hints

use once_cell::sync::Lazy;
use regex::Regex;

/// "present"/"current" in a date range resolves to this year.
pub const PRESENT_YEAR: u32 = 2025;

static YEARS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\+?\s*years?\s+(?:of\s+)?(?:experience|work|background)",
        r"(?i)(?:experience|work|background).*?(\d+)\+?\s*years?",
        r"(?i)(\d+)\+?\s*year\s+(?:experience|work)",
        r"(?i)(?:over|more\s+than|around|approximately)\s+(\d+)\s+years?",
        r"(?i)(\d{4})\s*[-–]\s*(?:\d{4}|present|current)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid years pattern"))
    .collect()
});

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4})\s*[-–]\s*(\d{4}|present|current)").expect("Invalid date range pattern")
});

const SENIOR_TITLES: &[&str] = &["senior", "lead", "principal", "architect"];
const LEADERSHIP_VERBS: &[&str] = &["led", "managed", "mentored", "supervised"];
const ADVANCED_RESPONSIBILITIES: &[&str] = &["technical decisions", "architecture", "code review", "best practices"];
const SCALE_INDICATORS: &[&str] = &["microservices", "scalable", "enterprise", "production"];

const JOB_HISTORY_WORDS: &[&str] = &[
    "developer", "engineer", "architect", "analyst", "lead", "worked", "built",
    "developed", "designed", "managed", "experience", "years", "projects",
];

/// Largest years-of-experience figure mentioned, or 0 when none is found.
pub fn extract_years_experience(text: &str) -> u32 {
    let mut years = Vec::new();

    for regex in YEARS_PATTERNS.iter() {
        for caps in regex.captures_iter(text) {
            let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
                continue;
            };
            // Calendar years are handled by the date-range pass below.
            if value > 1990 && value < 2030 {
                continue;
            }
            years.push(value);
        }
    }

    for caps in DATE_RANGE_RE.captures_iter(text) {
        let Some(start) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
            continue;
        };
        let end = match caps.get(2).map(|m| m.as_str().to_lowercase()) {
            Some(end) if end == "present" || end == "current" => PRESENT_YEAR,
            Some(end) => match end.parse::<u32>() {
                Ok(year) => year,
                Err(_) => continue,
            },
            None => continue,
        };
        if 1990 < start && start < end && end <= PRESENT_YEAR {
            years.push(end - start);
        }
    }

    years.into_iter().max().unwrap_or(0)
}

/// Additive seniority heuristic in the range 0.0..=7.5.
pub fn assess_seniority(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let mentions = |terms: &[&str]| terms.iter().any(|term| lower.contains(term));

    let mut seniority = 0.0;
    if mentions(SENIOR_TITLES) {
        seniority += 3.0;
    }
    if mentions(LEADERSHIP_VERBS) {
        seniority += 2.0;
    }
    if mentions(ADVANCED_RESPONSIBILITIES) {
        seniority += 1.5;
    }
    if mentions(SCALE_INDICATORS) {
        seniority += 1.0;
    }
    seniority
}

pub fn has_job_history(text: &str) -> bool {
    let lower = text.to_lowercase();
    JOB_HISTORY_WORDS.iter().any(|word| lower.contains(word))
}
