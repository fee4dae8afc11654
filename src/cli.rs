//! CLI interface for the CV screener

use crate::config::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cv-screener")]
#[command(about = "Screen CVs against job descriptions with a local language model")]
#[command(long_about = "Extract structured records from CVs and job descriptions, score candidates by skill overlap, shortlist them and prepare interview requests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen a folder of CVs against job descriptions
    Screen {
        /// CSV file with "Job Title" and "Job Description" columns
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Folder containing CV files
        #[arg(long)]
        cvs: Option<PathBuf>,

        /// Job title to screen for (repeatable, defaults to every title in the CSV)
        #[arg(short, long = "title")]
        titles: Vec<String>,

        /// Shortlisting threshold in percent (0-100)
        #[arg(short = 'T', long)]
        threshold: Option<f64>,

        /// Model to use for extraction
        #[arg(short, long)]
        model: Option<String>,

        /// Export all match results as CSV to this file or directory
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the formatted output to this file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Also write each interview request to a file in this folder
        #[arg(long)]
        outbox: Option<PathBuf>,

        /// Skip interview request generation
        #[arg(long)]
        no_schedule: bool,

        /// Show job summaries and every candidate's score
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the job titles in a job description CSV
    Titles {
        /// CSV file with "Job Title" and "Job Description" columns
        #[arg(short, long)]
        jobs: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Command line value first, then the configured default
pub fn resolve_path(cli_value: Option<PathBuf>, configured: Option<&PathBuf>, what: &str) -> Result<PathBuf, String> {
    cli_value
        .or_else(|| configured.cloned())
        .ok_or_else(|| format!("No {} given and none configured", what))
}

/// A directory, existing or written with a trailing separator, gets the default report file name appended
pub fn report_destination(path: &Path) -> PathBuf {
    let names_directory = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR);
    if names_directory || path.is_dir() {
        path.join(crate::output::report::suggest_filename(true))
    } else {
        path.to_path_buf()
    }
}

pub fn config_file(cli_value: Option<&PathBuf>) -> PathBuf {
    cli_value.cloned().unwrap_or_else(Config::config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_screen_command() {
        let cli = Cli::parse_from([
            "cv-screener",
            "screen",
            "--jobs",
            "jobs.csv",
            "--cvs",
            "cvs",
            "-t",
            "Data Engineer",
            "--title",
            "Analyst",
            "-T",
            "65",
            "--no-schedule",
            "-o",
            "json",
            "--save",
            "out/report.json",
        ]);

        match cli.command {
            Commands::Screen {
                jobs,
                titles,
                threshold,
                no_schedule,
                output,
                save,
                ..
            } => {
                assert_eq!(jobs, Some(PathBuf::from("jobs.csv")));
                assert_eq!(titles, vec!["Data Engineer", "Analyst"]);
                assert_eq!(threshold, Some(65.0));
                assert!(no_schedule);
                assert_eq!(output, "json");
                assert_eq!(save, Some(PathBuf::from("out/report.json")));
            }
            _ => panic!("expected screen command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_resolve_path() {
        let configured = PathBuf::from("configured.csv");
        assert_eq!(
            resolve_path(Some(PathBuf::from("cli.csv")), Some(&configured), "jobs CSV").unwrap(),
            PathBuf::from("cli.csv")
        );
        assert_eq!(resolve_path(None, Some(&configured), "jobs CSV").unwrap(), configured);
        assert!(resolve_path(None, None, "jobs CSV").is_err());
    }

    #[test]
    fn test_report_destination() {
        let dir = TempDir::new().unwrap();
        let in_dir = report_destination(dir.path());
        assert_eq!(in_dir.parent().unwrap(), dir.path());
        assert!(in_dir.extension().is_some_and(|ext| ext == "csv"));

        let file = dir.path().join("out.csv");
        assert_eq!(report_destination(&file), file);
    }

    #[test]
    fn test_report_destination_for_new_directory() {
        let dir = TempDir::new().unwrap();
        let requested = PathBuf::from(format!("{}/reports/", dir.path().display()));

        let destination = report_destination(&requested);
        assert_eq!(destination.parent().unwrap(), dir.path().join("reports"));
        assert!(destination
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("job_screening_report_"));
    }
}
