//! CSV export of match results

use crate::error::Result;
use crate::processing::scoring::MatchResult;
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_REPORT_NAME: &str = "job_screening_report";

pub const REPORT_HEADER: [&str; 5] = ["CV Filename", "Candidate Name", "Match Score (%)", "Email", "Phone Number"];

/// Field order matches `REPORT_HEADER`
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    cv_filename: &'a str,
    candidate_name: &'a str,
    match_score: f64,
    email: &'a str,
    phone_number: &'a str,
}

impl<'a> From<&'a MatchResult> for ReportRow<'a> {
    fn from(result: &'a MatchResult) -> Self {
        Self {
            cv_filename: &result.cv_filename,
            candidate_name: &result.candidate_name,
            match_score: result.match_score,
            email: &result.email,
            phone_number: &result.phone_number,
        }
    }
}

/// Write one row per result, header included even when there are no results
pub fn write_report<'a, W, I>(writer: W, results: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a MatchResult>,
{
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;

    for result in results {
        csv_writer.serialize(ReportRow::from(result))?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn export_report<'a, I>(path: &Path, results: I) -> Result<()>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(path)?;
    write_report(file, results)?;
    info!("Report exported to {}", path.display());
    Ok(())
}

/// Report file name, optionally stamped with the current UTC time
pub fn suggest_filename(timestamp: bool) -> String {
    if timestamp {
        format!("{}_{}.csv", DEFAULT_REPORT_NAME, chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        format!("{}.csv", DEFAULT_REPORT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn result(file: &str, name: &str, score: f64) -> MatchResult {
        MatchResult {
            cv_filename: file.to_string(),
            candidate_name: name.to_string(),
            job_title: "Engineer".to_string(),
            match_score: score,
            email: format!("{}@example.com", name.to_lowercase()),
            phone_number: "+1 555 0100".to_string(),
        }
    }

    #[test]
    fn test_write_report() {
        let results = vec![result("a.pdf", "Ann", 66.67), result("b.pdf", "Doe, John", 100.0)];
        let mut buffer = Vec::new();
        write_report(&mut buffer, &results).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "CV Filename,Candidate Name,Match Score (%),Email,Phone Number");
        assert_eq!(lines[1], "a.pdf,Ann,66.67,ann@example.com,+1 555 0100");
        assert!(lines[2].starts_with("b.pdf,\"Doe, John\",100"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_report_has_header() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &Vec::<MatchResult>::new()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "CV Filename,Candidate Name,Match Score (%),Email,Phone Number\n"
        );
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("out.csv");
        export_report(&path, &vec![result("a.pdf", "Ann", 50.0)]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "50.0");
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(false), "job_screening_report.csv");
        let stamped = suggest_filename(true);
        assert!(stamped.starts_with("job_screening_report_"));
        assert!(stamped.ends_with(".csv"));
    }
}
