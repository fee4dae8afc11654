//! Input manager: CV folder discovery and per-file text extraction

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::{has_extension, FileType};
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct InputManager {
    extensions: Vec<String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            extensions: vec!["pdf".to_string()],
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Files in `dir` with an accepted extension, sorted by file name
    pub async fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(ScreenerError::SourceUnavailable(format!(
                "CV folder does not exist or is not a directory: {}",
                dir.display()
            )));
        }

        let mut entries = fs::read_dir(dir).await?;
        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file() && has_extension(&path, &self.extensions) {
                documents.push(path);
            } else {
                debug!("Skipping {}", path.display());
            }
        }

        documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(documents)
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ScreenerError::SourceUnavailable(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Unknown => Err(ScreenerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
