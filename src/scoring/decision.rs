//! Hiring decision and qualitative findings derived from a finished analysis

use super::{AnalysisResult, ComponentScores};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "HIRE")]
    Hire,
    #[serde(rename = "INTERVIEW")]
    Interview,
    #[serde(rename = "MAYBE")]
    Maybe,
    #[serde(rename = "REJECT")]
    Reject,
    #[serde(rename = "error")]
    Error,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Hire => "HIRE",
            Decision::Interview => "INTERVIEW",
            Decision::Maybe => "MAYBE",
            Decision::Reject => "REJECT",
            Decision::Error => "error",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiringDecision {
    pub decision: Decision,
    pub confidence: &'static str,
    pub reasoning: &'static str,
}

pub fn hiring_decision(overall: f64) -> HiringDecision {
    if overall >= 80.0 {
        HiringDecision {
            decision: Decision::Hire,
            confidence: "high",
            reasoning: "Excellent match across all criteria with strong qualifications",
        }
    } else if overall >= 65.0 {
        HiringDecision {
            decision: Decision::Interview,
            confidence: "high",
            reasoning: "Good candidate with strong potential, worth interviewing",
        }
    } else if overall >= 45.0 {
        HiringDecision {
            decision: Decision::Maybe,
            confidence: "medium",
            reasoning: "Fair match with some gaps, consider for phone screening",
        }
    } else {
        HiringDecision {
            decision: Decision::Reject,
            confidence: "high",
            reasoning: "Poor match with significant gaps in required qualifications",
        }
    }
}

pub fn risk_factors(result: &AnalysisResult) -> Vec<String> {
    let c = &result.component_scores;
    let mut risks = Vec::new();

    if c.skill_match < 40.0 {
        risks.push("Significant technical skills gap");
    }
    if c.experience_match < 40.0 {
        risks.push("Limited relevant experience");
    }
    if c.keyword_match < 30.0 {
        risks.push("Poor alignment with job requirements");
    }
    if result.overall_score < 30.0 {
        risks.push("Overall poor qualification match");
    }

    risks.into_iter().map(String::from).collect()
}

pub fn strengths(c: &ComponentScores) -> Vec<String> {
    [
        (c.skill_match, "Strong technical skills alignment"),
        (c.experience_match, "Excellent relevant experience"),
        (c.keyword_match, "Strong keyword match with job requirements"),
        (c.context_match, "Good contextual fit for the role"),
    ]
    .into_iter()
    .filter(|(score, _)| *score >= 70.0)
    .map(|(_, text)| text.to_string())
    .collect()
}

pub fn weaknesses(c: &ComponentScores) -> Vec<String> {
    [
        (c.skill_match, "Technical skills need development"),
        (c.experience_match, "Limited relevant experience"),
        (c.keyword_match, "Resume doesn't align well with job requirements"),
        (c.context_match, "Contextual fit could be improved"),
    ]
    .into_iter()
    .filter(|(score, _)| *score < 50.0)
    .map(|(_, text)| text.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::MatchLevel;

    fn result(overall: f64, keyword: f64, skill: f64, context: f64, experience: f64) -> AnalysisResult {
        AnalysisResult {
            overall_score: overall,
            match_level: MatchLevel::Fair,
            explanation: String::new(),
            recommendations: Vec::new(),
            component_scores: ComponentScores {
                keyword_match: keyword,
                skill_match: skill,
                context_match: context,
                experience_match: experience,
            },
        }
    }

    #[test]
    fn test_hiring_thresholds() {
        assert_eq!(hiring_decision(85.0).decision, Decision::Hire);
        assert_eq!(hiring_decision(80.0).decision, Decision::Hire);
        assert_eq!(hiring_decision(79.99).decision, Decision::Interview);
        assert_eq!(hiring_decision(65.0).decision, Decision::Interview);
        assert_eq!(hiring_decision(50.0).decision, Decision::Maybe);
        assert_eq!(hiring_decision(50.0).confidence, "medium");
        assert_eq!(hiring_decision(44.99).decision, Decision::Reject);
        assert_eq!(hiring_decision(10.0).decision, Decision::Reject);
        assert_eq!(hiring_decision(10.0).confidence, "high");
    }

    #[test]
    fn test_decision_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Decision::Interview).unwrap(), "\"INTERVIEW\"");
        assert_eq!(serde_json::to_string(&Decision::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_risk_factors() {
        let risks = risk_factors(&result(25.0, 29.0, 39.0, 75.0, 39.0));
        assert_eq!(
            risks,
            vec![
                "Significant technical skills gap",
                "Limited relevant experience",
                "Poor alignment with job requirements",
                "Overall poor qualification match",
            ]
        );
        assert!(risk_factors(&result(70.0, 40.0, 40.0, 40.0, 40.0)).is_empty());
    }

    #[test]
    fn test_strengths_and_weaknesses() {
        let scores = result(60.0, 45.0, 70.0, 50.0, 49.9).component_scores;
        assert_eq!(strengths(&scores), vec!["Strong technical skills alignment"]);
        assert_eq!(
            weaknesses(&scores),
            vec!["Limited relevant experience", "Resume doesn't align well with job requirements"]
        );
    }
}
