//! CV screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod llm;
pub mod output;

pub use error::{Result, ScreenerError};
pub use config::Config;
pub use llm::client::{LanguageModel, OllamaClient};
pub use processing::pipeline::{Screener, ScreeningReport, ScreeningRequest};
