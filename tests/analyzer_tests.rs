//! End-to-end tests for file-level analysis

use resume_screener::input::DocumentReader;
use resume_screener::scoring::{Decision, MatchLevel};
use resume_screener::sink::{JsonlSink, ResultSink, StoredRecord};
use resume_screener::{Result, ResumeAnalyzer, ResumeScreenerError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

const RESUME: &str = "tests/fixtures/sample_resume.txt";
const WEAK_RESUME: &str = "tests/fixtures/weak_resume.txt";
const BLANK: &str = "tests/fixtures/blank.txt";
const JOB: &str = "tests/fixtures/python_job.txt";

struct MemoryReader(HashMap<PathBuf, String>);

impl DocumentReader for MemoryReader {
    async fn read_text(&self, path: &Path) -> Result<String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| ResumeScreenerError::InvalidInput(format!("no document for {}", path.display())))
    }
}

struct FailingSink;

impl ResultSink for FailingSink {
    fn store(&self, _record: &StoredRecord) -> Result<Option<String>> {
        Err(ResumeScreenerError::Sink("disk full".to_string()))
    }
}

#[tokio::test]
async fn test_analyze_fixture_files() {
    let analyzer = ResumeAnalyzer::new();
    let result = analyzer.analyze_for_job(Path::new(RESUME), Path::new(JOB)).await;

    assert!(result.is_success());
    assert_eq!(result.metadata.resume_filename, "sample_resume.txt");
    assert_eq!(result.metadata.job_description_filename, "python_job.txt");
    assert_eq!(result.metadata.analyzer_type, "simple_enhanced");
    assert!(result.metadata.processing_time.is_some());

    let resume = result.resume_data.as_ref().unwrap();
    assert_eq!(resume.candidate_name, "John Doe");
    assert_eq!(resume.email, "john.doe@example.com");
    assert_eq!(resume.phone, "(555) 123-4567");
    assert_eq!(resume.experience_years, 6);
    assert!(resume.skills.contains(&"python".to_string()));
    assert!(resume.skills.contains(&"docker".to_string()));

    let job = result.job_data.as_ref().unwrap();
    assert_eq!(job.title, "Senior Python Developer");
    assert_eq!(job.company, "Company: Globex Analytics");
    assert!(job.required_skills.contains(&"django".to_string()));

    let score = result.overall_score();
    assert!((0.0..=100.0).contains(&score));
    assert_ne!(result.analysis_results.match_level, MatchLevel::Error);
    assert_ne!(result.hiring_recommendation.decision, Decision::Error);
    assert_eq!(result.hiring_recommendation.next_steps, result.analysis_results.recommendations);
}

#[tokio::test]
async fn test_strong_resume_outranks_weak_resume() {
    let analyzer = ResumeAnalyzer::new();
    let strong = analyzer.analyze_for_job(Path::new(RESUME), Path::new(JOB)).await;
    let weak = analyzer.analyze_for_job(Path::new(WEAK_RESUME), Path::new(JOB)).await;

    assert!(strong.is_success() && weak.is_success());
    assert!(strong.overall_score() > weak.overall_score());

    let strong_skills = strong.detailed_results.scoring_details.component_scores.skill_match;
    let weak_skills = weak.detailed_results.scoring_details.component_scores.skill_match;
    assert!(strong_skills > weak_skills);
}

#[tokio::test]
async fn test_blank_resume_is_error_shaped() {
    let analyzer = ResumeAnalyzer::new();
    let result = analyzer.analyze_for_job(Path::new(BLANK), Path::new(JOB)).await;

    assert!(!result.is_success());
    assert!(result
        .metadata
        .error
        .as_deref()
        .unwrap()
        .contains("Resume file appears to be empty or unreadable"));
    assert!(result.resume_data.is_none());
    assert!(result.job_data.is_none());
    assert_eq!(result.overall_score(), 0.0);
    assert_eq!(result.hiring_recommendation.decision, Decision::Error);
}

#[tokio::test]
async fn test_blank_job_description_is_error_shaped() {
    let analyzer = ResumeAnalyzer::new();
    let result = analyzer.analyze_for_job(Path::new(RESUME), Path::new(BLANK)).await;

    assert!(!result.is_success());
    assert!(result
        .metadata
        .error
        .as_deref()
        .unwrap()
        .contains("Job description file appears to be empty or unreadable"));
}

#[tokio::test]
async fn test_missing_resume_file() {
    let analyzer = ResumeAnalyzer::new();
    let result = analyzer
        .analyze_for_job(Path::new("tests/fixtures/missing.pdf"), Path::new(JOB))
        .await;

    assert!(!result.is_success());
    assert_eq!(result.metadata.resume_filename, "missing.pdf");
    assert!(result.metadata.error.as_deref().unwrap().contains("File does not exist"));
}

#[tokio::test]
async fn test_candidate_name_falls_back_to_filename() {
    let resume_path = PathBuf::from("uploads/priya_sharma_resume.pdf");
    let job_path = PathBuf::from("uploads/backend.txt");
    let reader = MemoryReader(HashMap::from([
        (
            resume_path.clone(),
            "backend developer with 4 years of experience in python and django".to_string(),
        ),
        (job_path.clone(), "Backend Developer\nPython, Django, PostgreSQL".to_string()),
    ]));

    let analyzer = ResumeAnalyzer::new().with_reader(reader);
    let result = analyzer.analyze_for_job(&resume_path, &job_path).await;

    assert!(result.is_success());
    let resume = result.resume_data.unwrap();
    assert_eq!(resume.candidate_name, "Priya Sharma");
    assert_eq!(resume.experience_years, 4);
    assert_eq!(resume.email, "Not found");
}

#[tokio::test]
async fn test_default_analyzer_stores_nothing() {
    let result = ResumeAnalyzer::new()
        .analyze_for_job(Path::new(RESUME), Path::new(JOB))
        .await;

    assert!(result.is_success());
    assert!(result.metadata.record_id.is_none());
}

#[tokio::test]
async fn test_failing_sink_does_not_fail_analysis() {
    let analyzer = ResumeAnalyzer::new().with_sink(FailingSink);
    let result = analyzer.analyze_for_job(Path::new(RESUME), Path::new(JOB)).await;

    assert!(result.is_success());
    assert!(result.metadata.record_id.is_none());
}

#[tokio::test]
async fn test_jsonl_sink_records_successful_analyses() {
    let dir = TempDir::new().unwrap();
    let sink_path = dir.path().join("results").join("analyses.jsonl");
    let analyzer = ResumeAnalyzer::new().with_sink(JsonlSink::new(&sink_path));

    let stored = analyzer.analyze_for_job(Path::new(RESUME), Path::new(JOB)).await;
    let failed = analyzer.analyze_for_job(Path::new(BLANK), Path::new(JOB)).await;
    assert!(!failed.is_success());

    let records = JsonlSink::new(&sink_path).read_all().unwrap();
    assert_eq!(records.len(), 1);

    let (id, record) = &records[0];
    assert_eq!(Some(id), stored.metadata.record_id.as_ref());
    assert_eq!(record.resume_filename, "sample_resume.txt");
    assert!((record.overall_score - stored.overall_score()).abs() < 1e-9);
}

#[tokio::test]
async fn test_batch_preserves_input_order() {
    let resumes = vec![
        PathBuf::from(WEAK_RESUME),
        PathBuf::from("tests/fixtures/missing.txt"),
        PathBuf::from(RESUME),
    ];

    for max_concurrency in [1, 4] {
        let analyzer = Arc::new(ResumeAnalyzer::new());
        let results = analyzer
            .analyze_batch(Path::new(JOB), &resumes, max_concurrency)
            .await;

        let names: Vec<&str> = results.iter().map(|r| r.metadata.resume_filename.as_str()).collect();
        assert_eq!(names, ["weak_resume.txt", "missing.txt", "sample_resume.txt"]);
        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert!(results[2].is_success());
    }
}

#[tokio::test]
async fn test_batch_progress_callback() {
    let resumes = vec![PathBuf::from(RESUME), PathBuf::from(WEAK_RESUME)];
    let analyzer = Arc::new(ResumeAnalyzer::new());

    let mut seen = Vec::new();
    let results = analyzer
        .analyze_batch_with(Path::new(JOB), &resumes, 2, |result| {
            seen.push(result.metadata.resume_filename.clone())
        })
        .await;

    assert_eq!(results.len(), 2);
    seen.sort();
    assert_eq!(seen, ["sample_resume.txt", "weak_resume.txt"]);
}

#[tokio::test]
async fn test_empty_batch() {
    let analyzer = Arc::new(ResumeAnalyzer::new());
    let results = analyzer.analyze_batch(Path::new(JOB), &[], 3).await;
    assert!(results.is_empty());
}
