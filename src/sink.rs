//! Result persistence
//!
//! A sink receives one record per completed analysis. Storing is
//! best-effort: the analyzer logs a failed store and carries on.

use crate::error::{Result, ResumeScreenerError};
use crate::output::report::ExtendedResult;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use uuid::Uuid;

/// One stored analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub timestamp: String,
    pub resume_filename: String,
    pub job_description_filename: String,
    pub overall_score: f64,
    pub match_level: String,
    pub hiring_recommendation: String,
    pub result: ExtendedResult,
}

impl StoredRecord {
    pub fn from_result(result: &ExtendedResult) -> Self {
        Self {
            timestamp: result.metadata.timestamp.clone(),
            resume_filename: result.metadata.resume_filename.clone(),
            job_description_filename: result.metadata.job_description_filename.clone(),
            overall_score: result.analysis_results.overall_score,
            match_level: result.analysis_results.match_level.to_string(),
            hiring_recommendation: result.hiring_recommendation.decision.to_string(),
            result: result.clone(),
        }
    }
}

pub trait ResultSink: Send + Sync {
    /// Persist a record. Returns its identifier, or `None` when the sink
    /// keeps nothing.
    fn store(&self, record: &StoredRecord) -> Result<Option<String>>;
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn store(&self, _record: &StoredRecord) -> Result<Option<String>> {
        Ok(None)
    }
}

#[derive(Serialize)]
struct JsonlLine<'a> {
    id: &'a str,
    #[serde(flatten)]
    record: &'a StoredRecord,
}

/// Appends one JSON document per line to a file.
pub struct JsonlSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonlSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Every record in the file, oldest first, with its identifier.
    pub fn read_all(&self) -> Result<Vec<(String, StoredRecord)>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let mut value: serde_json::Value = serde_json::from_str(line)?;
                let id = value
                    .as_object_mut()
                    .and_then(|obj| obj.remove("id"))
                    .and_then(|id| id.as_str().map(String::from))
                    .ok_or_else(|| ResumeScreenerError::Sink(format!("record without id in {}", self.path.display())))?;
                Ok((id, serde_json::from_value(value)?))
            })
            .collect()
    }
}

impl ResultSink for JsonlSink {
    fn store(&self, record: &StoredRecord) -> Result<Option<String>> {
        let id = Uuid::new_v4().to_string();
        let mut line = serde_json::to_string(&JsonlLine { id: &id, record })?;
        line.push('\n');

        let _guard = self
            .lock
            .lock()
            .map_err(|_| ResumeScreenerError::Sink("results file lock poisoned".to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ResumeScreenerError::Sink(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ResumeScreenerError::Sink(format!("Failed to open {}: {}", self.path.display(), e)))?;
        file.write_all(line.as_bytes())
            .map_err(|e| ResumeScreenerError::Sink(format!("Failed to write {}: {}", self.path.display(), e)))?;

        debug!("Stored analysis record {} in {}", id, self.path.display());
        Ok(Some(id))
    }
}
