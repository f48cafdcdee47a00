//! Input manager for handling different file types

use crate::error::{Result, ResumeScreenerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::input::DocumentReader;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::Mutex;

pub struct InputManager {
    cache: Mutex<HashMap<String, String>>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.lock().await.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.is_file() {
            return Err(ResumeScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path);
        let text = match self.extract_typed(path, file_type).await {
            Ok(text) => text,
            Err(e) if file_type.has_text_fallback() => {
                warn!("{}; reading '{}' as plain text instead", e, path.display());
                PlainTextExtractor.extract(path).await?
            }
            Err(e) => return Err(e),
        };

        if self.enable_cache {
            self.cache.lock().await.insert(path_str, text.clone());
        }

        Ok(text)
    }

    async fn extract_typed(&self, path: &Path, file_type: FileType) -> Result<String> {
        match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Text | FileType::Unknown => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
        }
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    pub async fn cache_size(&self) -> usize {
        self.cache.lock().await.len()
    }
}

impl DocumentReader for InputManager {
    async fn read_text(&self, path: &Path) -> Result<String> {
        self.extract_text(path).await
    }
}
