//! Language model integration: client, prompts and output adaptation

pub mod client;
pub mod prompts;
pub mod extraction;
pub mod analyzer;
