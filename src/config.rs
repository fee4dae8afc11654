//! Configuration management for the CV screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub screening: ScreeningConfig,
    pub scheduling: SchedulingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the Ollama server
    pub endpoint: String,
    pub name: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Minimum match score (percent) for a candidate to be shortlisted
    pub threshold: f64,
    pub jobs_csv: Option<PathBuf>,
    pub cv_dir: Option<PathBuf>,
    /// File extensions picked up from the CV folder
    pub cv_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchedulingConfig {
    pub company_name: String,
    pub interview_format: String,
    pub potential_dates: Vec<String>,
    pub potential_times: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            name: "mistral".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            jobs_csv: None,
            cv_dir: None,
            cv_extensions: vec!["pdf".to_string()],
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            company_name: "[Company Name]".to_string(),
            interview_format: "Online Video Call".to_string(),
            potential_dates: vec![
                "November 5th, 2023".to_string(),
                "November 6th, 2023".to_string(),
            ],
            potential_times: vec![
                "10:00 AM - 12:00 PM".to_string(),
                "2:00 PM - 4:00 PM".to_string(),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            detailed: false,
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-screener")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.screening.threshold)?;

        if self.model.endpoint.trim().is_empty() {
            return Err(ScreenerError::Configuration("model.endpoint is empty".to_string()));
        }
        if self.model.name.trim().is_empty() {
            return Err(ScreenerError::Configuration("model.name is empty".to_string()));
        }
        if self.screening.cv_extensions.is_empty() {
            return Err(ScreenerError::Configuration(
                "screening.cv_extensions must list at least one extension".to_string(),
            ));
        }
        Ok(())
    }
}

/// Thresholds are percentages; anything outside [0, 100] is a configuration error
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(ScreenerError::Configuration(format!(
            "Shortlisting threshold must be between 0 and 100, got {}",
            threshold
        )));
    }
    Ok(())
}
