//! File-level analysis: read documents, score, build the extended result

use crate::config::Config;
use crate::error::{Result, ResumeScreenerError};
use crate::input::{DocumentReader, InputManager};
use crate::output::report::{ExtendedResult, JobData, ResultMetadata, ResumeData, ANALYZER_TYPE};
use crate::processing::{extract_skills, extract_years_experience, normalize_text};
use crate::profile::{extract_company, extract_job_title, CandidateProfile};
use crate::scoring::{self, AnalysisResult};
use crate::sink::{JsonlSink, NullSink, ResultSink, StoredRecord};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Scores resumes against job descriptions.
///
/// Documents are read through a [`DocumentReader`] and every successful
/// file-level analysis is handed to a [`ResultSink`].
pub struct ResumeAnalyzer<R = InputManager> {
    reader: R,
    sink: Arc<dyn ResultSink>,
}

impl Default for ResumeAnalyzer<InputManager> {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeAnalyzer<InputManager> {
    pub fn new() -> Self {
        Self {
            reader: InputManager::new(),
            sink: Arc::new(NullSink),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let reader = InputManager::new().with_cache(config.input.enable_cache);
        let sink: Arc<dyn ResultSink> = if config.storage.enabled {
            Arc::new(JsonlSink::new(&config.storage.results_path))
        } else {
            Arc::new(NullSink)
        };
        Self { reader, sink }
    }
}

impl<R: DocumentReader> ResumeAnalyzer<R> {
    pub fn with_reader<T: DocumentReader>(self, reader: T) -> ResumeAnalyzer<T> {
        ResumeAnalyzer {
            reader,
            sink: self.sink,
        }
    }

    pub fn with_sink(mut self, sink: impl ResultSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Core text analysis; never fails.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        scoring::analyze(resume_text, job_text)
    }

    pub fn generate_report(&self, result: &AnalysisResult) -> String {
        generate_report(result)
    }

    /// Analyze a resume file against a job description file.
    ///
    /// Read failures and empty documents produce an error-shaped result
    /// with `metadata.success == false`. A failing sink is logged only.
    pub async fn analyze_for_job(&self, resume_path: &Path, job_path: &Path) -> ExtendedResult {
        let started = Instant::now();
        let metadata = base_metadata(resume_path, job_path);

        let mut result = match self.build_result(resume_path, job_path, metadata.clone(), started).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Analysis of {} failed: {}", resume_path.display(), e);
                return ExtendedResult::failed(
                    ResultMetadata {
                        processing_time: Some(started.elapsed().as_secs_f64()),
                        ..metadata
                    },
                    &e.to_string(),
                );
            }
        };

        if result.is_success() {
            match self.sink.store(&StoredRecord::from_result(&result)) {
                Ok(id) => result.metadata.record_id = id,
                Err(e) => warn!("Failed to store analysis result: {}", e),
            }
        }

        info!(
            "Analyzed {} against {}: {:.2} ({})",
            result.metadata.resume_filename,
            result.metadata.job_description_filename,
            result.analysis_results.overall_score,
            result.analysis_results.match_level
        );
        result
    }

    async fn build_result(
        &self,
        resume_path: &Path,
        job_path: &Path,
        mut metadata: ResultMetadata,
        started: Instant,
    ) -> Result<ExtendedResult> {
        let resume_text = self.reader.read_text(resume_path).await?;
        let job_text = self.reader.read_text(job_path).await?;

        if resume_text.trim().is_empty() {
            return Err(ResumeScreenerError::InvalidInput(
                "Resume file appears to be empty or unreadable".to_string(),
            ));
        }
        if job_text.trim().is_empty() {
            return Err(ResumeScreenerError::InvalidInput(
                "Job description file appears to be empty or unreadable".to_string(),
            ));
        }

        debug!("Resume text: {} chars, job text: {} chars", resume_text.len(), job_text.len());

        let analysis = self.analyze(&resume_text, &job_text);
        let profile = CandidateProfile::from_document(&resume_text, resume_path);
        debug!("Extracted candidate name: {}", profile.candidate_name);

        let resume_data = ResumeData {
            candidate_name: profile.candidate_name,
            email: profile.email,
            phone: profile.phone,
            skills: extract_skills(&normalize_text(&resume_text)).into_iter().collect(),
            experience_years: extract_years_experience(&resume_text),
            filename: metadata.resume_filename.clone(),
        };
        let job_data = JobData {
            title: extract_job_title(&job_text),
            company: extract_company(&job_text),
            required_skills: extract_skills(&normalize_text(&job_text)).into_iter().collect(),
            filename: metadata.job_description_filename.clone(),
        };

        metadata.processing_time = Some(started.elapsed().as_secs_f64());
        Ok(ExtendedResult::from_analysis(metadata, resume_data, job_data, &analysis))
    }
}

impl<R: DocumentReader + 'static> ResumeAnalyzer<R> {
    /// Analyze many resumes against one job description, at most
    /// `max_concurrency` at a time. Results keep the order of `resume_paths`.
    pub async fn analyze_batch(
        self: Arc<Self>,
        job_path: &Path,
        resume_paths: &[PathBuf],
        max_concurrency: usize,
    ) -> Vec<ExtendedResult> {
        self.analyze_batch_with(job_path, resume_paths, max_concurrency, |_| {}).await
    }

    /// Like [`analyze_batch`](Self::analyze_batch), calling `on_done` as
    /// each analysis finishes.
    pub async fn analyze_batch_with<F>(
        self: Arc<Self>,
        job_path: &Path,
        resume_paths: &[PathBuf],
        max_concurrency: usize,
        mut on_done: F,
    ) -> Vec<ExtendedResult>
    where
        F: FnMut(&ExtendedResult),
    {
        let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for (index, resume_path) in resume_paths.iter().cloned().enumerate() {
            let analyzer = Arc::clone(&self);
            let semaphore = Arc::clone(&semaphore);
            let job_path = job_path.to_path_buf();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                (index, analyzer.analyze_for_job(&resume_path, &job_path).await)
            });
        }

        let mut results: Vec<Option<ExtendedResult>> = vec![None; resume_paths.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => {
                    on_done(&result);
                    results[index] = Some(result);
                }
                Err(e) => warn!("Batch analysis task failed: {}", e),
            }
        }

        results
            .into_iter()
            .zip(resume_paths)
            .map(|(result, resume_path)| {
                result.unwrap_or_else(|| {
                    ExtendedResult::failed(base_metadata(resume_path, job_path), "analysis task aborted")
                })
            })
            .collect()
    }
}

/// Last path component, splitting on both `/` and `\`.
pub fn display_filename(path: &Path) -> String {
    let full = path.to_string_lossy();
    full.rsplit(['/', '\\']).next().unwrap_or_default().to_string()
}

fn base_metadata(resume_path: &Path, job_path: &Path) -> ResultMetadata {
    ResultMetadata {
        success: true,
        timestamp: chrono::Local::now().to_rfc3339(),
        analyzer_type: ANALYZER_TYPE.to_string(),
        processing_time: None,
        resume_file: resume_path.to_string_lossy().to_string(),
        job_description_file: job_path.to_string_lossy().to_string(),
        resume_filename: display_filename(resume_path),
        job_description_filename: display_filename(job_path),
        record_id: None,
        error: None,
    }
}

/// Plain-text summary of a core analysis.
pub fn generate_report(result: &AnalysisResult) -> String {
    let recommendations: Vec<String> = result
        .recommendations
        .iter()
        .map(|rec| format!("- {}", rec))
        .collect();

    format!(
        "\nResume Analysis Report\n=====================\nOverall Score: {:.1}%\nMatch Level: {}\n\nAnalysis: {}\n\nRecommendations:\n{}\n",
        result.overall_score,
        result.match_level.as_str().to_uppercase(),
        result.explanation,
        recommendations.join("\n")
    )
}
