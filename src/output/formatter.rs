//! Console and JSON presentation of screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::llm::extraction::ExtractedJobRecord;
use crate::processing::pipeline::{JobScreening, ScreeningReport};
use crate::processing::scoring::SkillBreakdown;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
}

/// Colored per-job sections for the terminal
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

/// Picks the formatter for a requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score(&self, score: f64, threshold: f64) -> String {
        let text = format!("{:.2}%", score);
        if score >= threshold {
            self.colorize(&text, Color::Green)
        } else {
            self.colorize(&text, Color::BrightBlack)
        }
    }

    fn format_job_summary(&self, record: &ExtractedJobRecord) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("Job Summary", 3));
        output.push_str(&format!("Required Skills: {}\n", or_none(&record.required_skills.to_string())));
        output.push_str(&format!("Required Experience: {}\n", or_none(&record.required_experience)));
        output.push_str(&format!(
            "Educational Qualifications: {}\n",
            or_none(&record.educational_qualifications.to_string())
        ));
        if !record.responsibilities.is_empty() {
            output.push_str("Responsibilities:\n");
            for responsibility in &record.responsibilities {
                output.push_str(&format!("  • {}\n", responsibility));
            }
        }
        output
    }

    fn format_candidate_table(&self, screening: &JobScreening, threshold: f64) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("All Candidates", 3));
        if screening.results.is_empty() {
            output.push_str("No CVs were processed\n");
        }
        for (i, result) in screening.results.iter().enumerate() {
            output.push_str(&format!(
                "  • {} | {} | {}\n",
                result.cv_filename,
                or_none(&result.candidate_name),
                self.format_score(result.match_score, threshold)
            ));
            if let Some(breakdown) = screening.skill_breakdowns.get(i) {
                output.push_str(&self.format_breakdown(breakdown));
            }
        }
        output
    }

    fn format_breakdown(&self, breakdown: &SkillBreakdown) -> String {
        format!(
            "      {} {}\n      {} {}\n",
            self.colorize("✓ matched:", Color::Green),
            or_none(&breakdown.matched.join(", ")),
            self.colorize("✗ missing:", Color::Red),
            or_none(&breakdown.missing.join(", "))
        )
    }

    fn format_screening(&self, screening: &JobScreening, threshold: f64) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header(&format!("💼 {}", screening.job_title), 2));

        if self.detailed {
            output.push_str(&self.format_job_summary(&screening.job_record));
            output.push_str(&self.format_candidate_table(screening, threshold));
        }

        output.push_str(&self.format_header(
            &format!("Shortlisted Candidates (Match Score >= {}%)", threshold),
            3,
        ));
        if screening.shortlisted.is_empty() {
            output.push_str(&self.colorize("No Candidates Shortlisted based on Threshold\n", Color::Yellow));
        }
        for result in &screening.shortlisted {
            output.push_str(&format!(
                "  - CV File: {}, Candidate: {}, Match Score: {}\n",
                result.cv_filename,
                or_none(&result.candidate_name),
                self.format_score(result.match_score, threshold)
            ));
        }

        for request in &screening.interview_requests {
            output.push_str(&format!(
                "\n{}\n{}\n{}\n",
                self.colorize(&format!("--- Interview Request for {} ---", request.candidate_name), Color::Cyan),
                request.message,
                self.colorize(&format!("--- End of Interview Request for {} ---", request.candidate_name), Color::Cyan),
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 JOB SCREENING REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Model: {} | Processing time: {}ms\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.model,
            report.processing_time_ms
        ));
        output.push_str(&format!(
            "CVs processed: {} | Skipped: {} | Threshold: {}%\n",
            report.candidates.len(),
            report.skipped.len(),
            report.threshold
        ));

        if self.detailed && !report.skipped.is_empty() {
            output.push_str(&self.format_header("Skipped CVs", 3));
            for skipped in &report.skipped {
                output.push_str(&format!("  ⚠️  {}: {}\n", skipped.file, skipped.reason));
            }
        }

        for screening in &report.screenings {
            output.push_str(&self.format_screening(screening, report.threshold));
        }

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "{} job(s) screened, {} candidate(s) shortlisted, {} interview request(s) prepared\n",
            report.screenings.len(),
            report.all_shortlisted().count(),
            report.all_interview_requests().count()
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &ScreeningReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

fn or_none(text: &str) -> &str {
    if text.trim().is_empty() {
        "(none)"
    } else {
        text
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::interview::InterviewRequest;
    use crate::processing::pipeline::{CandidateProfile, SkippedDocument};
    use crate::processing::scoring::MatchResult;
    use crate::processing::skills::TextOrList;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_report() -> ScreeningReport {
        let strong = MatchResult {
            cv_filename: "ada.pdf".to_string(),
            candidate_name: "Ada".to_string(),
            job_title: "Data Engineer".to_string(),
            match_score: 80.0,
            email: "ada@example.com".to_string(),
            phone_number: String::new(),
        };
        let weak = MatchResult {
            cv_filename: "bob.pdf".to_string(),
            candidate_name: String::new(),
            match_score: 33.33,
            ..strong.clone()
        };

        ScreeningReport {
            generated_at: Utc::now(),
            model: "mistral".to_string(),
            threshold: 70.0,
            jobs_csv: "jobs.csv".to_string(),
            cv_dir: "cvs".to_string(),
            candidates: vec![CandidateProfile {
                cv_filename: "ada.pdf".to_string(),
                record: Default::default(),
            }],
            skipped: vec![SkippedDocument {
                file: "scan.pdf".to_string(),
                reason: "no extractable text".to_string(),
            }],
            screenings: vec![JobScreening {
                job_title: "Data Engineer".to_string(),
                job_record: ExtractedJobRecord {
                    required_skills: TextOrList::List(vec!["python".to_string(), "sql".to_string()]),
                    responsibilities: vec!["Build pipelines".to_string()],
                    ..Default::default()
                },
                results: vec![strong.clone(), weak],
                skill_breakdowns: vec![
                    SkillBreakdown {
                        score: 80.0,
                        matched: vec!["python".to_string(), "sql".to_string()],
                        missing: Vec::new(),
                    },
                    SkillBreakdown {
                        score: 33.33,
                        matched: Vec::new(),
                        missing: vec!["python".to_string(), "sql".to_string()],
                    },
                ],
                shortlisted: vec![strong],
                interview_requests: vec![InterviewRequest {
                    cv_filename: "ada.pdf".to_string(),
                    candidate_name: "Ada".to_string(),
                    job_title: "Data Engineer".to_string(),
                    email: "ada@example.com".to_string(),
                    message: "Dear Ada,".to_string(),
                }],
            }],
            processing_time_ms: 42,
        }
    }

    #[test]
    fn test_console_plain() {
        let output = ConsoleFormatter::new(false, false).format_report(&sample_report()).unwrap();

        assert!(output.contains("Shortlisted Candidates (Match Score >= 70%)"));
        assert!(output.contains("  - CV File: ada.pdf, Candidate: Ada, Match Score: 80.00%"));
        assert!(output.contains("--- Interview Request for Ada ---\nDear Ada,\n--- End of Interview Request for Ada ---"));
        assert!(!output.contains("bob.pdf"));
        assert!(!output.contains("Job Summary"));
        assert!(!output.contains("missing:"));
    }

    #[test]
    fn test_console_detailed() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();

        assert!(output.contains("Required Skills: python, sql"));
        assert!(output.contains("  • Build pipelines"));
        assert!(output.contains("  • bob.pdf | (none) | 33.33%\n      ✓ matched: (none)\n      ✗ missing: python, sql"));
        assert!(output.contains("      ✓ matched: python, sql\n      ✗ missing: (none)"));
        assert!(output.contains("scan.pdf: no extractable text"));
    }

    #[test]
    fn test_console_empty_shortlist() {
        let mut report = sample_report();
        report.screenings[0].shortlisted.clear();
        report.screenings[0].interview_requests.clear();

        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains("No Candidates Shortlisted based on Threshold"));
    }

    #[test]
    fn test_json_output() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["threshold"], 70.0);
        assert_eq!(value["screenings"][0]["shortlisted"][0]["match_score"], 80.0);
        assert_eq!(value["screenings"][0]["job_record"]["required_skills"][1], "sql");
    }

    #[test]
    fn test_report_generator_dispatch() {
        let generator = ReportGenerator::new(false, false);
        let json = generator.generate(&sample_report(), OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let console = generator.generate(&sample_report(), OutputFormat::Console).unwrap();
        assert!(console.contains("JOB SCREENING REPORT"));
    }

    #[test]
    fn test_save_report_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("report.json");
        save_report_to_file("{}", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }
}
