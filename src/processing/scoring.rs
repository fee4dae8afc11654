//! Skill overlap scoring between a job and a candidate

use crate::llm::extraction::{ExtractedCandidateRecord, ExtractedJobRecord};
use crate::processing::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// Outcome of scoring one CV against one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub cv_filename: String,
    pub candidate_name: String,
    pub job_title: String,
    /// Percentage in [0, 100], two decimals
    pub match_score: f64,
    pub email: String,
    pub phone_number: String,
}

/// Detailed view of a score: which required skills were found and which were not
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBreakdown {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Percentage of `required` skills the candidate has.
///
/// A job with no requirements scores 0.0 for everybody.
pub fn score(required: &SkillSet, candidate: &SkillSet) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let matched = required.intersection(candidate).count();
    round_to_hundredths(matched as f64 / required.len() as f64 * 100.0)
}

pub fn breakdown(required: &SkillSet, candidate: &SkillSet) -> SkillBreakdown {
    SkillBreakdown {
        score: score(required, candidate),
        matched: required.intersection(candidate).map(str::to_string).collect(),
        missing: required.difference(candidate).map(str::to_string).collect(),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores extraction records against each other
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl MatchScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score_records(&self, job: &ExtractedJobRecord, candidate: &ExtractedCandidateRecord) -> f64 {
        score(&job.required_skills.to_skill_set(), &candidate.skills.to_skill_set())
    }

    pub fn breakdown_records(&self, job: &ExtractedJobRecord, candidate: &ExtractedCandidateRecord) -> SkillBreakdown {
        breakdown(&job.required_skills.to_skill_set(), &candidate.skills.to_skill_set())
    }

    pub fn match_candidate(
        &self,
        cv_filename: &str,
        job_title: &str,
        job: &ExtractedJobRecord,
        candidate: &ExtractedCandidateRecord,
    ) -> MatchResult {
        MatchResult {
            cv_filename: cv_filename.to_string(),
            candidate_name: candidate.name.clone(),
            job_title: job_title.to_string(),
            match_score: self.score_records(job, candidate),
            email: candidate.email.clone(),
            phone_number: candidate.phone_number.clone(),
        }
    }
}
