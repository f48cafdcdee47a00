//! Extended analysis result consumed by the presentation layers
//!
//! Field names and nesting are a stable contract: formatters, the JSON
//! output and the results sink all serialize these types as-is.

use crate::scoring::decision::{hiring_decision, risk_factors, strengths, weaknesses, Decision};
use crate::scoring::{AnalysisResult, ComponentScores, MatchLevel};
use serde::{Deserialize, Serialize};

pub const ANALYZER_TYPE: &str = "simple_enhanced";

/// Full outcome of analysing one resume file against one job description file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedResult {
    pub metadata: ResultMetadata,

    /// Absent when the analysis failed before the documents were read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_data: Option<ResumeData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_data: Option<JobData>,

    pub analysis_results: AnalysisSummary,
    pub detailed_results: DetailedResults,
    pub hiring_recommendation: HiringRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// False when `error` is set
    pub success: bool,

    /// RFC 3339 local time at which the analysis started
    pub timestamp: String,

    pub analyzer_type: String,

    /// Wall-clock seconds spent reading and scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,

    pub resume_file: String,
    pub job_description_file: String,
    pub resume_filename: String,
    pub job_description_filename: String,

    /// Identifier assigned by the results sink, if the result was stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    /// Canonical skill tokens, sorted
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobData {
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub overall_score: f64,
    pub match_level: MatchLevel,
    /// Confidence in the score, 20-90
    pub confidence: f64,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedResults {
    pub hard_matching: HardMatching,
    pub soft_matching: SoftMatching,
    pub llm_analysis: LlmAnalysis,
    pub scoring_details: ScoringDetails,
}

/// Lexical components. The tf-idf and bm25 slots carry the context and
/// experience scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardMatching {
    pub overall_score: f64,
    pub keyword_score: f64,
    pub skills_score: f64,
    pub tfidf_score: f64,
    pub bm25_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftMatching {
    pub combined_semantic_score: f64,
    pub semantic_score: f64,
    pub embedding_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmAnalysis {
    pub llm_score: f64,
    /// good, medium, poor or error
    pub llm_verdict: String,
    pub gap_analysis: GapAnalysis,
    pub personalized_feedback: String,
    pub improvement_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub detailed_analysis: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringDetails {
    pub component_scores: ComponentScores,
    pub weighted_scores: ComponentScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringRecommendation {
    pub decision: Decision,
    /// high, medium or none
    pub confidence: String,
    pub reasoning: String,
    pub next_steps: Vec<String>,
    /// Estimated chance of success, 5-95
    pub success_probability: f64,
}

pub fn score_confidence(overall: f64) -> f64 {
    (overall * 0.8 + 20.0).min(90.0)
}

pub fn success_probability(overall: f64) -> f64 {
    (overall * 0.9 + 5.0).min(95.0)
}

pub fn llm_verdict(overall: f64) -> &'static str {
    if overall > 60.0 {
        "good"
    } else if overall > 30.0 {
        "medium"
    } else {
        "poor"
    }
}

impl DetailedResults {
    fn from_analysis(result: &AnalysisResult) -> Self {
        let c = result.component_scores;
        Self {
            hard_matching: HardMatching {
                overall_score: c.keyword_match,
                keyword_score: c.keyword_match,
                skills_score: c.skill_match,
                tfidf_score: c.context_match,
                bm25_score: c.experience_match,
            },
            soft_matching: SoftMatching {
                combined_semantic_score: (c.context_match + c.experience_match) / 2.0,
                semantic_score: c.context_match,
                embedding_score: c.experience_match,
            },
            llm_analysis: LlmAnalysis {
                llm_score: c.experience_match,
                llm_verdict: llm_verdict(result.overall_score).to_string(),
                gap_analysis: GapAnalysis {
                    detailed_analysis: result.explanation.clone(),
                    strengths: strengths(&c),
                    weaknesses: weaknesses(&c),
                },
                personalized_feedback: result.explanation.clone(),
                improvement_suggestions: result.recommendations.clone(),
            },
            scoring_details: ScoringDetails {
                component_scores: c,
                weighted_scores: c,
            },
        }
    }

    fn failed(explanation: &str) -> Self {
        Self {
            hard_matching: HardMatching::default(),
            soft_matching: SoftMatching::default(),
            llm_analysis: LlmAnalysis {
                llm_score: 0.0,
                llm_verdict: "error".to_string(),
                gap_analysis: GapAnalysis::default(),
                personalized_feedback: explanation.to_string(),
                improvement_suggestions: Vec::new(),
            },
            scoring_details: ScoringDetails::default(),
        }
    }
}

impl ExtendedResult {
    pub fn from_analysis(
        metadata: ResultMetadata,
        resume_data: ResumeData,
        job_data: JobData,
        result: &AnalysisResult,
    ) -> Self {
        if result.is_error() {
            let message = result
                .explanation
                .strip_prefix("Analysis failed: ")
                .unwrap_or(&result.explanation);
            return Self::failed(metadata, message);
        }

        let overall = result.overall_score;
        let decision = hiring_decision(overall);

        Self {
            metadata,
            resume_data: Some(resume_data),
            job_data: Some(job_data),
            analysis_results: AnalysisSummary {
                overall_score: overall,
                match_level: result.match_level,
                confidence: score_confidence(overall),
                explanation: result.explanation.clone(),
                recommendations: result.recommendations.clone(),
                risk_factors: risk_factors(result),
            },
            detailed_results: DetailedResults::from_analysis(result),
            hiring_recommendation: HiringRecommendation {
                decision: decision.decision,
                confidence: decision.confidence.to_string(),
                reasoning: decision.reasoning.to_string(),
                next_steps: result.recommendations.clone(),
                success_probability: success_probability(overall),
            },
        }
    }

    /// Error-shaped result; `metadata.success` is cleared and the message recorded.
    pub fn failed(mut metadata: ResultMetadata, message: &str) -> Self {
        let explanation = format!("Analysis failed: {}", message);
        metadata.success = false;
        metadata.error = Some(message.to_string());
        metadata.record_id = None;

        Self {
            metadata,
            resume_data: None,
            job_data: None,
            analysis_results: AnalysisSummary {
                overall_score: 0.0,
                match_level: MatchLevel::Error,
                confidence: 0.0,
                explanation: explanation.clone(),
                recommendations: vec!["Please check input files and try again".to_string()],
                risk_factors: vec!["Analysis system error".to_string()],
            },
            detailed_results: DetailedResults::failed(&explanation),
            hiring_recommendation: HiringRecommendation {
                decision: Decision::Error,
                confidence: "none".to_string(),
                reasoning: explanation,
                next_steps: vec!["Fix the error and retry analysis".to_string()],
                success_probability: 0.0,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.metadata.success
    }

    pub fn overall_score(&self) -> f64 {
        self.analysis_results.overall_score
    }

    /// Candidate name, or the resume file name when unavailable.
    pub fn candidate_label(&self) -> &str {
        self.resume_data
            .as_ref()
            .map(|r| r.candidate_name.as_str())
            .unwrap_or(&self.metadata.resume_filename)
    }
}
