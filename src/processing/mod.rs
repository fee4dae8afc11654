//! Skill normalization, scoring, shortlisting and the screening pipeline

pub mod skills;
pub mod scoring;
pub mod shortlist;
pub mod pipeline;
