//! Job description catalog loaded from a CSV file
//!
//! The file needs `Job Title` and `Job Description` columns; anything else is
//! ignored. Exports from spreadsheet tools are often not UTF-8, so decoding
//! falls back to Latin-1.

use crate::error::{Result, ScreenerError};
use log::{info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

pub const TITLE_COLUMN: &str = "Job Title";
pub const DESCRIPTION_COLUMN: &str = "Job Description";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Latin1,
}

#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    postings: Vec<JobPosting>,
}

impl JobCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ScreenerError::SourceUnavailable(format!(
                "Job description CSV not found: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)?;
        let (text, encoding) = decode(bytes);
        if encoding == SourceEncoding::Latin1 {
            warn!("{} is not valid UTF-8, decoded as Latin-1", path.display());
        }

        let catalog = Self::from_csv_str(&text)?;
        info!("Loaded {} job descriptions from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let title_idx = column_index(&headers, TITLE_COLUMN)?;
        let description_idx = column_index(&headers, DESCRIPTION_COLUMN)?;

        let mut postings = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let title = record.get(title_idx).unwrap_or_default().trim();
            if title.is_empty() {
                warn!("Skipping job description row {} with no title", row + 2);
                continue;
            }
            postings.push(JobPosting {
                title: title.to_string(),
                description: record.get(description_idx).unwrap_or_default().to_string(),
            });
        }

        Ok(Self { postings })
    }

    /// Unique titles in the order they first appear
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.postings
            .iter()
            .map(|posting| posting.title.as_str())
            .filter(|title| seen.insert(*title))
            .collect()
    }

    /// First posting with this exact title
    pub fn find(&self, title: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| posting.title == title)
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| ScreenerError::JobSource(format!("missing required column '{}'", name)))
}

/// UTF-8 when valid, otherwise Latin-1, which maps every byte to a character
pub fn decode(bytes: Vec<u8>) -> (String, SourceEncoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, SourceEncoding::Utf8),
        Err(e) => {
            let text = e.into_bytes().into_iter().map(char::from).collect();
            (text, SourceEncoding::Latin1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "Job Title,Job Description,Location\n\
        Software Engineer,\"Build services in Python, Java\",Remote\n\
        Data Scientist,Model things,Berlin\n\
        Software Engineer,Second posting,Paris\n\
        ,orphan row,Nowhere\n";

    #[test]
    fn test_parse_and_titles() {
        let catalog = JobCatalog::from_csv_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.titles(), vec!["Software Engineer", "Data Scientist"]);
    }

    #[test]
    fn test_find_returns_first_posting() {
        let catalog = JobCatalog::from_csv_str(SAMPLE).unwrap();
        let posting = catalog.find("Software Engineer").unwrap();
        assert_eq!(posting.description, "Build services in Python, Java");
        assert!(catalog.find("Astronaut").is_none());
    }

    #[test]
    fn test_missing_column() {
        let result = JobCatalog::from_csv_str("Title,Description\nA,B\n");
        assert!(matches!(result, Err(ScreenerError::JobSource(_))));
    }

    #[test]
    fn test_bom_and_case_in_headers() {
        let catalog = JobCatalog::from_csv_str("\u{feff}job title,JOB DESCRIPTION\nQA,Test all the things\n").unwrap();
        assert_eq!(catalog.titles(), vec!["QA"]);
    }

    #[test]
    fn test_latin1_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.csv");
        std::fs::write(&path, b"Job Title,Job Description\nD\xe9veloppeur,Caf\xe9 code\n").unwrap();

        let catalog = JobCatalog::load(&path).unwrap();
        assert_eq!(catalog.titles(), vec!["Développeur"]);
        assert_eq!(catalog.postings()[0].description, "Café code");
    }

    #[test]
    fn test_decode_prefers_utf8() {
        let (text, encoding) = decode("Ingénieur".as_bytes().to_vec());
        assert_eq!(text, "Ingénieur");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_missing_file() {
        let result = JobCatalog::load(Path::new("missing/jobs.csv"));
        assert!(matches!(result, Err(ScreenerError::SourceUnavailable(_))));
    }
}
