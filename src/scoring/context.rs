//! Contextual phrase and vocabulary overlap score

use crate::processing::{extract_phrases, text_processor::word_set};

pub const NO_PHRASES_SCORE: f64 = 75.0;
pub const CONTEXT_FLOOR: f64 = 40.0;
const MAX_TERM_BONUS: f64 = 15.0;

const ROLE_TERMS: &[&str] = &["developer", "engineer", "analyst", "architect", "lead", "senior", "manager"];
const TECH_TERMS: &[&str] = &["python", "sql", "data", "web", "api", "database", "cloud", "framework"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatches {
    pub exact: usize,
    pub partial: usize,
    pub total: usize,
}

/// For each job phrase the first resume phrase that is equal or contains /
/// is contained in it decides whether it counts as exact or partial.
pub fn match_phrases(job_phrases: &[String], resume_phrases: &[String]) -> PhraseMatches {
    let mut matches = PhraseMatches {
        total: job_phrases.len(),
        ..Default::default()
    };

    for phrase in job_phrases {
        for candidate in resume_phrases {
            if phrase == candidate {
                matches.exact += 1;
                break;
            }
            if phrase.contains(candidate.as_str()) || candidate.contains(phrase.as_str()) {
                matches.partial += 1;
                break;
            }
        }
    }

    matches
}

fn overlap_multiplier(common_words: usize) -> Option<f64> {
    if common_words > 30 {
        Some(1.25)
    } else if common_words > 15 {
        Some(1.18)
    } else {
        None
    }
}

fn term_bonus(resume: &str, job: &str) -> f64 {
    let shared = ROLE_TERMS
        .iter()
        .chain(TECH_TERMS.iter())
        .filter(|term| resume.contains(*term) && job.contains(*term))
        .count();
    (shared as f64 * 2.0).min(MAX_TERM_BONUS)
}

/// Score in [40, 100] from normalized resume and job text.
pub fn context_score(resume: &str, job: &str) -> f64 {
    let job_phrases = extract_phrases(job);
    let resume_phrases = extract_phrases(resume);

    if job_phrases.is_empty() {
        return NO_PHRASES_SCORE;
    }

    let matches = match_phrases(&job_phrases, &resume_phrases);
    let total = matches.total as f64;
    let score = matches.exact as f64 / total * 75.0 + matches.partial as f64 / total * 35.0;

    apply_overlap_boosts(score, resume, job)
}

fn apply_overlap_boosts(mut score: f64, resume: &str, job: &str) -> f64 {
    let resume_lower = resume.to_lowercase();
    let job_lower = job.to_lowercase();

    let common = word_set(&job_lower).intersection(&word_set(&resume_lower)).count();
    if let Some(multiplier) = overlap_multiplier(common) {
        score = (score * multiplier).min(100.0);
    }

    (score + term_bonus(&resume_lower, &job_lower)).max(CONTEXT_FLOOR).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_and_partial_matching() {
        let job = phrases(&["senior engineer", "web development", "sql database"]);
        let resume = phrases(&["senior engineer", "development", "nosql database"]);

        let matches = match_phrases(&job, &resume);
        assert_eq!(matches, PhraseMatches { exact: 1, partial: 2, total: 3 });
    }

    #[test]
    fn test_first_candidate_decides() {
        // The earlier partial hit wins over a later exact one.
        let job = phrases(&["web development"]);
        let resume = phrases(&["development", "web development"]);

        let matches = match_phrases(&job, &resume);
        assert_eq!(matches.exact, 0);
        assert_eq!(matches.partial, 1);
    }

    #[test]
    fn test_no_job_phrases_default() {
        assert_eq!(context_score("python django", "python flask"), 75.0);
        assert_eq!(context_score("", ""), 75.0);
    }

    #[test]
    fn test_unmatched_phrases_hit_floor() {
        assert_eq!(context_score("gardening", "senior accountant"), 40.0);
    }

    #[test]
    fn test_overlap_multipliers() {
        assert_eq!(overlap_multiplier(31), Some(1.25));
        assert_eq!(overlap_multiplier(30), Some(1.18));
        assert_eq!(overlap_multiplier(16), Some(1.18));
        assert_eq!(overlap_multiplier(15), None);
    }

    #[test]
    fn test_term_bonus_capped() {
        let text = "developer engineer analyst architect lead senior manager python sql data web api";
        assert_eq!(term_bonus(text, text), 15.0);
    }

    #[test]
    fn test_exact_phrase_match_scores_high() {
        let job = "senior engineer for web development";
        let resume = "senior engineer doing web development";
        // all three phrases exact (75) + engineer/senior/web terms (6)
        assert_eq!(context_score(resume, job), 81.0);
    }
}
