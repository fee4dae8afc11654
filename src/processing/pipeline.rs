//! Screening pipeline: CV preprocessing, per-job matching, shortlisting and scheduling

use crate::config::{validate_threshold, Config};
use crate::error::{Result, ScreenerError};
use crate::input::job_source::{JobCatalog, JobPosting};
use crate::input::manager::InputManager;
use crate::llm::analyzer::RecordExtractor;
use crate::llm::client::LanguageModel;
use crate::llm::extraction::{ExtractedCandidateRecord, ExtractedJobRecord};
use crate::output::interview::{InterviewRequest, InterviewScheduler};
use crate::processing::scoring::{MatchResult, MatchScorer, SkillBreakdown};
use crate::processing::shortlist::ShortlistFilter;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// What to screen and how strictly
#[derive(Debug, Clone)]
pub struct ScreeningRequest {
    pub jobs_csv: PathBuf,
    pub cv_dir: PathBuf,
    /// Empty means every title in the CSV
    pub titles: Vec<String>,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateProfile {
    pub cv_filename: String,
    pub record: ExtractedCandidateRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobScreening {
    pub job_title: String,
    pub job_record: ExtractedJobRecord,
    /// Every CV scored against this job, in CV order
    pub results: Vec<MatchResult>,
    /// Matched and missing skills, aligned with `results`
    pub skill_breakdowns: Vec<SkillBreakdown>,
    pub shortlisted: Vec<MatchResult>,
    pub interview_requests: Vec<InterviewRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub threshold: f64,
    pub jobs_csv: String,
    pub cv_dir: String,
    pub candidates: Vec<CandidateProfile>,
    pub skipped: Vec<SkippedDocument>,
    pub screenings: Vec<JobScreening>,
    pub processing_time_ms: u64,
}

impl ScreeningReport {
    /// Results of every job, in run order
    pub fn all_results(&self) -> impl Iterator<Item = &MatchResult> {
        self.screenings.iter().flat_map(|screening| screening.results.iter())
    }

    pub fn all_shortlisted(&self) -> impl Iterator<Item = &MatchResult> {
        self.screenings.iter().flat_map(|screening| screening.shortlisted.iter())
    }

    pub fn all_interview_requests(&self) -> impl Iterator<Item = &InterviewRequest> {
        self.screenings
            .iter()
            .flat_map(|screening| screening.interview_requests.iter())
    }
}

pub struct Screener<M> {
    extractor: RecordExtractor<M>,
    input: InputManager,
    scorer: MatchScorer,
    scheduler: Option<InterviewScheduler>,
    show_progress: bool,
}

impl<M: LanguageModel> Screener<M> {
    pub fn new(model: M, config: &Config) -> Self {
        Self {
            extractor: RecordExtractor::new(model),
            input: InputManager::new().with_extensions(config.screening.cv_extensions.clone()),
            scorer: MatchScorer::new(),
            scheduler: Some(InterviewScheduler::new(config.scheduling.clone())),
            show_progress: false,
        }
    }

    pub fn without_scheduling(mut self) -> Self {
        self.scheduler = None;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub async fn run(&self, request: &ScreeningRequest) -> Result<ScreeningReport> {
        let start = Instant::now();

        validate_request(request)?;
        let catalog = JobCatalog::load(&request.jobs_csv)?;
        let titles = resolve_titles(&catalog, &request.titles)?;
        let filter = ShortlistFilter::new(request.threshold);

        info!(
            "Screening {} job(s) from {} at threshold {}%",
            titles.len(),
            request.jobs_csv.display(),
            filter.threshold()
        );

        let (candidates, skipped) = self.preprocess_cvs(&request.cv_dir).await?;

        let mut screenings = Vec::with_capacity(titles.len());
        for title in &titles {
            match catalog.find(title) {
                Some(posting) => screenings.push(self.screen_job(posting, &candidates, &filter).await),
                None => warn!("No job description found for '{}', skipping", title),
            }
        }

        Ok(ScreeningReport {
            generated_at: Utc::now(),
            model: self.extractor.model().model_id().to_string(),
            threshold: request.threshold,
            jobs_csv: request.jobs_csv.display().to_string(),
            cv_dir: request.cv_dir.display().to_string(),
            candidates,
            skipped,
            screenings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Extract a record for every readable CV, once per run
    pub async fn preprocess_cvs(&self, cv_dir: &Path) -> Result<(Vec<CandidateProfile>, Vec<SkippedDocument>)> {
        let documents = self.input.discover(cv_dir).await?;
        if documents.is_empty() {
            warn!(
                "No CVs with extensions [{}] found in {}",
                self.input.extensions().join(", "),
                cv_dir.display()
            );
        }

        let progress = self.progress_bar(documents.len() as u64);
        let mut candidates = Vec::with_capacity(documents.len());
        let mut skipped = Vec::new();

        for path in &documents {
            let cv_filename = file_name(path);
            progress.set_message(cv_filename.clone());

            match self.input.extract_text(path).await {
                Ok(text) if text.trim().is_empty() => {
                    warn!("No text could be extracted from {}, skipping", cv_filename);
                    skipped.push(SkippedDocument {
                        file: cv_filename,
                        reason: "no extractable text".to_string(),
                    });
                }
                Ok(text) => {
                    let record = self.extractor.extract_candidate(&text).await;
                    candidates.push(CandidateProfile { cv_filename, record });
                }
                Err(e) => {
                    warn!("Could not read {}, skipping: {}", cv_filename, e);
                    skipped.push(SkippedDocument {
                        file: cv_filename,
                        reason: e.to_string(),
                    });
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!("Preprocessed {} CV(s), skipped {}", candidates.len(), skipped.len());
        Ok((candidates, skipped))
    }

    pub async fn screen_job(
        &self,
        posting: &JobPosting,
        candidates: &[CandidateProfile],
        filter: &ShortlistFilter,
    ) -> JobScreening {
        let job_record = self.extractor.summarize_job(&posting.description).await;
        if job_record.required_skills.is_empty() {
            warn!("No required skills extracted for '{}', every candidate scores 0", posting.title);
        }

        let results: Vec<MatchResult> = candidates
            .iter()
            .map(|candidate| {
                self.scorer
                    .match_candidate(&candidate.cv_filename, &posting.title, &job_record, &candidate.record)
            })
            .collect();
        let skill_breakdowns = candidates
            .iter()
            .map(|candidate| self.scorer.breakdown_records(&job_record, &candidate.record))
            .collect();
        let shortlisted = filter.apply(&results);
        info!(
            "'{}': {} of {} candidate(s) shortlisted",
            posting.title,
            shortlisted.len(),
            results.len()
        );

        let interview_requests = match &self.scheduler {
            Some(scheduler) => shortlisted
                .iter()
                .filter_map(|result| match scheduler.generate(result) {
                    Ok(request) => Some(request),
                    Err(e) => {
                        warn!("Could not prepare interview request for {}: {}", result.cv_filename, e);
                        None
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        JobScreening {
            job_title: posting.title.clone(),
            job_record,
            results,
            skill_breakdowns,
            shortlisted,
            interview_requests,
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar
    }
}

/// Paths and threshold, checked before anything is loaded
pub fn validate_request(request: &ScreeningRequest) -> Result<()> {
    validate_threshold(request.threshold)?;
    if !request.jobs_csv.is_file() {
        return Err(ScreenerError::Configuration(format!(
            "job description CSV not found: {}",
            request.jobs_csv.display()
        )));
    }
    if !request.cv_dir.is_dir() {
        return Err(ScreenerError::Configuration(format!(
            "CV folder not found: {}",
            request.cv_dir.display()
        )));
    }
    Ok(())
}

/// Requested titles, deduplicated, or every catalog title when none were requested
pub fn resolve_titles(catalog: &JobCatalog, requested: &[String]) -> Result<Vec<String>> {
    let titles: Vec<String> = if requested.is_empty() {
        catalog.titles().into_iter().map(str::to_string).collect()
    } else {
        let mut seen = HashSet::new();
        requested
            .iter()
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty() && seen.insert(title.clone()))
            .collect()
    };

    if titles.is_empty() {
        return Err(ScreenerError::Configuration("no job titles selected".to_string()));
    }

    let missing: Vec<&str> = titles
        .iter()
        .filter(|title| catalog.find(title).is_none())
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err(ScreenerError::Configuration(format!(
            "job title(s) not found in CSV: {}",
            missing.join(", ")
        )));
    }

    Ok(titles)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
