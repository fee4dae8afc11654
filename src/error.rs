//! Error handling for the CV screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Job description source error: {0}")]
    JobSource(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Model request failed: {0}")]
    ModelRequest(#[from] reqwest::Error),

    #[error("Model returned an error (status {status}): {message}")]
    ModelResponse { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ScreenerError::InvalidInput(err.to_string())
    }
}
