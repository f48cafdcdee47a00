//! Frequency-weighted keyword overlap score

use crate::processing::KeywordFrequency;
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const NO_KEYWORDS_SCORE: f64 = 80.0;
pub const KEYWORD_FLOOR: f64 = 40.0;
const MAX_DIVERSITY_BONUS: f64 = 28.0;

static IMPORTANT_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "python", "django", "flask", "java", "javascript", "aws", "azure", "gcp",
        "docker", "kubernetes", "postgresql", "mongodb", "react", "angular", "vue",
        "git", "api", "microservices", "scrum", "agile", "devops", "ci/cd",
        "machinelearning", "datascience", "analytics", "sql", "nosql", "data",
        "analyst", "developer", "engineer", "powerbi", "tableau", "excel",
    ]
    .into_iter()
    .collect()
});

static CONTEXT_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "experience", "development", "senior", "lead", "architect", "developer",
        "engineer", "programming", "software", "technical", "design", "build",
        "project", "team", "skills", "knowledge", "familiar", "working",
    ]
    .into_iter()
    .collect()
});

fn keyword_weight(keyword: &str, frequency: usize) -> f64 {
    let base = frequency.min(2) as f64;
    if IMPORTANT_KEYWORDS.contains(keyword) {
        base * 3.0
    } else if CONTEXT_KEYWORDS.contains(keyword) {
        base * 2.0
    } else {
        base
    }
}

/// Score in [40, 100]; 80 when the job yields no keywords.
pub fn keyword_score(resume: &KeywordFrequency, job: &KeywordFrequency) -> f64 {
    if job.is_empty() {
        return NO_KEYWORDS_SCORE;
    }

    let mut total_weight = 0.0;
    let mut matched_weight = 0.0;
    let mut common = 0usize;

    for (keyword, &job_freq) in job {
        let weight = keyword_weight(keyword, job_freq);
        total_weight += weight;

        if let Some(&resume_freq) = resume.get(keyword) {
            common += 1;
            let match_strength = (resume_freq as f64 / job_freq as f64 * 1.5).min(2.0);
            matched_weight += weight * match_strength;
        }
    }

    if total_weight == 0.0 {
        return NO_KEYWORDS_SCORE;
    }

    let match_ratio = matched_weight / total_weight;
    let base_score = match_ratio.powf(0.75) * 155.0;
    let diversity_bonus = (common as f64 * 4.0).min(MAX_DIVERSITY_BONUS);

    (base_score + diversity_bonus).min(100.0).max(KEYWORD_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, usize)]) -> KeywordFrequency {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_job_gets_default() {
        assert_eq!(keyword_score(&freq(&[("python", 3)]), &KeywordFrequency::new()), 80.0);
    }

    #[test]
    fn test_no_overlap_hits_floor() {
        let resume = freq(&[("excel", 1), ("accounting", 2)]);
        let job = freq(&[("python", 1), ("django", 1)]);
        assert_eq!(keyword_score(&resume, &job), 40.0);
    }

    #[test]
    fn test_partial_overlap_value() {
        // python weight 3 (important), cooking weight 1; resume matches python once.
        // ratio = 3 * 1.5 / 4 = 1.125 -> base ~169 -> capped at 100
        let resume = freq(&[("python", 1)]);
        let job = freq(&[("python", 1), ("cooking", 1)]);
        assert_eq!(keyword_score(&resume, &job), 100.0);

        // Only the unimportant keyword matches: ratio = 1.5 / 4 = 0.375
        let resume = freq(&[("cooking", 1)]);
        let expected = 0.375f64.powf(0.75) * 155.0 + 4.0;
        assert!((keyword_score(&resume, &job) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_weights() {
        assert_eq!(keyword_weight("python", 5), 6.0);
        assert_eq!(keyword_weight("experience", 1), 2.0);
        assert_eq!(keyword_weight("cooking", 2), 2.0);
        // Important wins over context for words in both sets.
        assert_eq!(keyword_weight("developer", 1), 3.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let job = freq(&[("alpha", 100), ("beta", 1), ("gamma", 7)]);
        for resume in [freq(&[]), freq(&[("alpha", 1)]), freq(&[("alpha", 500), ("beta", 500), ("gamma", 500)])] {
            let score = keyword_score(&resume, &job);
            assert!((40.0..=100.0).contains(&score), "score {} out of range", score);
        }
    }
}
