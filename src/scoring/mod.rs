//! Resume / job description scoring engine
//!
//! `analyze` is a pure function of its two inputs. The only shared data are
//! the immutable vocabulary tables of `processing`, so it can run on any
//! number of threads at once.

pub mod aggregate;
pub mod context;
pub mod decision;
pub mod experience;
pub mod keyword;
pub mod skill;

use crate::error::{Result, ResumeScreenerError};
use crate::processing::{extract_keywords, extract_skills, normalize_text};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

pub use decision::{hiring_decision, Decision, HiringDecision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Error,
}

impl MatchLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "excellent",
            MatchLevel::Good => "good",
            MatchLevel::Fair => "fair",
            MatchLevel::Poor => "poor",
            MatchLevel::Error => "error",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub keyword_match: f64,
    pub skill_match: f64,
    pub context_match: f64,
    pub experience_match: f64,
}

impl ComponentScores {
    fn rounded(&self) -> Self {
        Self {
            keyword_match: round2(self.keyword_match),
            skill_match: round2(self.skill_match),
            context_match: round2(self.context_match),
            experience_match: round2(self.experience_match),
        }
    }

    fn all_finite(&self) -> bool {
        [self.keyword_match, self.skill_match, self.context_match, self.experience_match]
            .iter()
            .all(|s| s.is_finite())
    }
}

/// Outcome of one resume / job description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub match_level: MatchLevel,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub component_scores: ComponentScores,
}

impl AnalysisResult {
    /// Error-shaped result returned instead of propagating a failure.
    pub fn failed(message: impl fmt::Display) -> Self {
        Self {
            overall_score: 0.0,
            match_level: MatchLevel::Error,
            explanation: format!("Analysis failed: {}", message),
            recommendations: vec!["Please check input data and try again".to_string()],
            component_scores: ComponentScores::default(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.match_level == MatchLevel::Error
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fallible scoring pipeline. Component scores are computed unrounded,
/// aggregated, then rounded to two decimals for the result.
pub fn try_analyze(resume_text: &str, job_text: &str) -> Result<AnalysisResult> {
    let resume_clean = normalize_text(resume_text);
    let job_clean = normalize_text(job_text);

    let resume_skills = extract_skills(&resume_clean);
    let job_skills = extract_skills(&job_clean);
    let resume_keywords = extract_keywords(&resume_clean);
    let job_keywords = extract_keywords(&job_clean);

    let scores = ComponentScores {
        keyword_match: keyword::keyword_score(&resume_keywords, &job_keywords),
        skill_match: skill::skill_score(&resume_skills, &job_skills),
        context_match: context::context_score(&resume_clean, &job_clean),
        experience_match: experience::experience_score(resume_text, job_text),
    };

    if !scores.all_finite() {
        return Err(ResumeScreenerError::Scoring(format!(
            "non-finite component score: {:?}",
            scores
        )));
    }

    debug!(
        "Component scores: keyword={:.2} skill={:.2} context={:.2} experience={:.2}",
        scores.keyword_match, scores.skill_match, scores.context_match, scores.experience_match
    );

    let overall = aggregate::overall_score(&scores);

    Ok(AnalysisResult {
        overall_score: round2(overall),
        match_level: aggregate::match_level(overall),
        explanation: aggregate::explanation(overall, &scores),
        recommendations: aggregate::recommendations(&scores, &job_skills, &resume_skills),
        component_scores: scores.rounded(),
    })
}

/// Score a resume against a job description. Never fails: any internal
/// error or panic is reported as an `error` match level.
pub fn analyze(resume_text: &str, job_text: &str) -> AnalysisResult {
    match panic::catch_unwind(AssertUnwindSafe(|| try_analyze(resume_text, job_text))) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            warn!("Analysis failed: {}", e);
            AnalysisResult::failed(e)
        }
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "internal panic".to_string());
            warn!("Analysis panicked: {}", message);
            AnalysisResult::failed(message)
        }
    }
}
