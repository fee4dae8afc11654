//! Input processing module
//! Handles CV discovery, document text extraction and job description loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod job_source;
