//! Model-backed extraction of CV and job description records

use crate::llm::client::LanguageModel;
use crate::llm::extraction::{adapt, ExtractedCandidateRecord, ExtractedJobRecord, FromModelFields};
use crate::llm::prompts::PromptTemplates;
use log::{debug, warn};
use std::time::Instant;

/// Turns raw document text into extraction records using a language model
pub struct RecordExtractor<M> {
    model: M,
    prompt_templates: PromptTemplates,
}

impl<M: LanguageModel> RecordExtractor<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            prompt_templates: PromptTemplates::default(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub async fn extract_candidate(&self, cv_text: &str) -> ExtractedCandidateRecord {
        let prompt = self.prompt_templates.render_cv_extraction(cv_text);
        self.run(&prompt).await
    }

    pub async fn summarize_job(&self, jd_text: &str) -> ExtractedJobRecord {
        let prompt = self.prompt_templates.render_jd_summary(jd_text);
        self.run(&prompt).await
    }

    /// A failed model call is treated like an unparseable answer
    async fn run<T: FromModelFields>(&self, prompt: &str) -> T {
        let start = Instant::now();
        match self.model.complete(prompt).await {
            Ok(response) => {
                debug!(
                    "Raw {} response from '{}' ({}ms):\n{}",
                    T::KIND,
                    self.model.model_id(),
                    start.elapsed().as_millis(),
                    response
                );
                adapt(&response)
            }
            Err(e) => {
                warn!(
                    "Model '{}' failed during {} extraction, continuing with empty fields: {}",
                    self.model.model_id(),
                    T::KIND,
                    e
                );
                T::default()
            }
        }
    }
}
