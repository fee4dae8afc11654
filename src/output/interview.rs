//! Interview request generation and delivery

use crate::config::SchedulingConfig;
use crate::error::Result;
use crate::processing::scoring::MatchResult;
use askama::Template;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

const TO_BE_DETERMINED: &str = "To be determined";
const FALLBACK_NAME: &str = "Candidate";

#[derive(Template)]
#[template(
    ext = "txt",
    source = "Subject: Interview Invitation for {{ job_title }} at {{ company_name }}

Dear {{ candidate_name }},

We are pleased to invite you for an interview for the {{ job_title }} position at {{ company_name }}.
Your application stood out, and we are excited to learn more about your qualifications.

The interview will be conducted as an {{ interview_format }}.

Please let us know your availability from the following potential dates and times:

Potential Dates: {{ dates }}
Potential Times (Your Time Zone): {{ times }}

Please reply to this message to confirm your preferred date and time, or to suggest alternative times if none of these work for you. We are flexible and happy to find a time that suits your schedule.

We look forward to speaking with you!

Sincerely,

The {{ company_name }} Recruitment Team"
)]
struct InterviewTemplate<'a> {
    candidate_name: &'a str,
    job_title: &'a str,
    company_name: &'a str,
    interview_format: &'a str,
    dates: String,
    times: String,
}

/// A rendered interview invitation for one shortlisted candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewRequest {
    pub cv_filename: String,
    pub candidate_name: String,
    pub job_title: String,
    pub email: String,
    pub message: String,
}

pub struct InterviewScheduler {
    config: SchedulingConfig,
}

impl InterviewScheduler {
    pub fn new(config: SchedulingConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, result: &MatchResult) -> Result<InterviewRequest> {
        let candidate_name = if result.candidate_name.trim().is_empty() {
            FALLBACK_NAME
        } else {
            result.candidate_name.trim()
        };

        let template = InterviewTemplate {
            candidate_name,
            job_title: &result.job_title,
            company_name: &self.config.company_name,
            interview_format: &self.config.interview_format,
            dates: join_or_tbd(&self.config.potential_dates),
            times: join_or_tbd(&self.config.potential_times),
        };

        Ok(InterviewRequest {
            cv_filename: result.cv_filename.clone(),
            candidate_name: candidate_name.to_string(),
            job_title: result.job_title.clone(),
            email: result.email.clone(),
            message: template.render()?,
        })
    }
}

fn join_or_tbd(items: &[String]) -> String {
    if items.is_empty() {
        TO_BE_DETERMINED.to_string()
    } else {
        items.join(", ")
    }
}

/// Write a request to `<outbox>/<job-title>__<cv-stem>.txt`
pub fn save_to_outbox(outbox: &Path, request: &InterviewRequest) -> Result<PathBuf> {
    std::fs::create_dir_all(outbox)?;

    let cv_stem = Path::new(&request.cv_filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{}__{}.txt", slugify(&request.job_title), slugify(&cv_stem));
    let path = outbox.join(file_name);

    let mut content = String::new();
    if !request.email.trim().is_empty() {
        content.push_str(&format!("To: {}\n", request.email.trim()));
    }
    content.push_str(&request.message);
    content.push('\n');

    std::fs::write(&path, content)?;
    info!("Saved interview request for {} to {}", request.candidate_name, path.display());
    Ok(path)
}

fn slugify(text: &str) -> String {
    let mut slug = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
