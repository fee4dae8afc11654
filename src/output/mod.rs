//! Report formatting, CSV export and interview requests

pub mod formatter;
pub mod report;
pub mod interview;
