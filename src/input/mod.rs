//! Input processing module
//! Handles file detection, text extraction, and input management

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

use crate::error::Result;
use std::path::Path;

pub use file_detector::FileType;
pub use manager::InputManager;

/// Turns a document on disk into plain text for the analyzer.
pub trait DocumentReader: Send + Sync {
    fn read_text(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}
