//! Weighted aggregation, match-level buckets, explanation and recommendations

use super::{ComponentScores, MatchLevel};
use crate::processing::SkillSet;
use crate::scoring::skill::missing_skills;

pub const KEYWORD_WEIGHT: f64 = 0.20;
pub const SKILL_WEIGHT: f64 = 0.40;
pub const CONTEXT_WEIGHT: f64 = 0.18;
pub const EXPERIENCE_WEIGHT: f64 = 0.22;

const RECOMMENDATION_THRESHOLD: f64 = 60.0;
const MAX_RECOMMENDATIONS: usize = 5;
const MAX_LISTED_MISSING_SKILLS: usize = 3;

pub fn overall_score(scores: &ComponentScores) -> f64 {
    scores.keyword_match * KEYWORD_WEIGHT
        + scores.skill_match * SKILL_WEIGHT
        + scores.context_match * CONTEXT_WEIGHT
        + scores.experience_match * EXPERIENCE_WEIGHT
}

pub fn match_level(overall: f64) -> MatchLevel {
    if overall >= 72.0 {
        MatchLevel::Excellent
    } else if overall >= 58.0 {
        MatchLevel::Good
    } else if overall >= 40.0 {
        MatchLevel::Fair
    } else {
        MatchLevel::Poor
    }
}

/// Qualitative sentence; its bands (80/65/45) intentionally differ from
/// the match-level bands.
pub fn assessment(overall: f64) -> &'static str {
    if overall >= 80.0 {
        "Excellent match with strong alignment across all criteria."
    } else if overall >= 65.0 {
        "Good match with minor gaps in some areas."
    } else if overall >= 45.0 {
        "Fair match but requires skill development."
    } else {
        "Poor match - significant gaps in required qualifications."
    }
}

pub fn explanation(overall: f64, scores: &ComponentScores) -> String {
    format!(
        "Overall match score: {:.1}/100. Breakdown: Keywords {:.1}%, Skills {:.1}%, Context {:.1}%, Experience {:.1}%. {}",
        overall,
        scores.keyword_match,
        scores.skill_match,
        scores.context_match,
        scores.experience_match,
        assessment(overall)
    )
}

pub fn recommendations(scores: &ComponentScores, job_skills: &SkillSet, resume_skills: &SkillSet) -> Vec<String> {
    let mut recommendations = Vec::new();

    if scores.keyword_match < RECOMMENDATION_THRESHOLD {
        recommendations.push("Improve resume keywords to better match job requirements".to_string());
    }

    if scores.skill_match < RECOMMENDATION_THRESHOLD {
        let missing = missing_skills(resume_skills, job_skills);
        if missing.is_empty() {
            recommendations.push("Highlight relevant technical skills more prominently".to_string());
        } else {
            let listed: Vec<&str> = missing.into_iter().take(MAX_LISTED_MISSING_SKILLS).collect();
            recommendations.push(format!("Develop skills in: {}", listed.join(", ")));
        }
    }

    if scores.context_match < RECOMMENDATION_THRESHOLD {
        recommendations.push("Add more specific examples of relevant experience".to_string());
    }

    if scores.experience_match < RECOMMENDATION_THRESHOLD {
        recommendations.push("Gain more experience in the relevant field or emphasize transferable skills".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Strong candidate - consider for interview".to_string());
    } else if recommendations.len() >= 3 {
        recommendations.push("Significant improvement needed before applying".to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
