//! Fixed-shape extraction records and the adapter that fills them from model output
//!
//! Model responses are nominally JSON but routinely arrive wrapped in prose or
//! markdown fences, truncated, or with fields of the wrong type. The adapter
//! never fails: whatever cannot be read is left at its empty default and a
//! warning is logged, so one bad response cannot stop a batch.

use crate::processing::skills::TextOrList;
use anyhow::{anyhow, Context};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured view of one job description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedJobRecord {
    pub job_title: String,
    pub responsibilities: Vec<String>,
    pub required_skills: TextOrList,
    pub required_experience: String,
    pub educational_qualifications: TextOrList,
}

/// Structured view of one CV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCandidateRecord {
    pub name: String,
    pub education: Vec<String>,
    pub work_experience: Vec<String>,
    pub skills: TextOrList,
    pub email: String,
    pub phone_number: String,
}

/// Records that can be populated from a parsed JSON object
pub trait FromModelFields: Default {
    /// Used in log messages
    const KIND: &'static str;

    fn from_fields(fields: &Map<String, Value>) -> Self;
}

impl FromModelFields for ExtractedJobRecord {
    const KIND: &'static str = "job description";

    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            job_title: text_field(fields, "job_title"),
            responsibilities: list_field(fields, "responsibilities"),
            required_skills: text_or_list_field(fields, "required_skills"),
            required_experience: text_field(fields, "required_experience"),
            educational_qualifications: text_or_list_field(fields, "educational_qualifications"),
        }
    }
}

impl FromModelFields for ExtractedCandidateRecord {
    const KIND: &'static str = "CV";

    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            name: text_field(fields, "name"),
            education: list_field(fields, "education"),
            work_experience: list_field(fields, "work_experience"),
            skills: text_or_list_field(fields, "skills"),
            email: text_field(fields, "email"),
            phone_number: text_field(fields, "phone_number"),
        }
    }
}

impl ExtractedJobRecord {
    pub fn from_model_output(payload: &str) -> Self {
        adapt(payload)
    }
}

impl ExtractedCandidateRecord {
    pub fn from_model_output(payload: &str) -> Self {
        adapt(payload)
    }
}

/// Build a record from raw model output, degrading to the empty record on any parse failure
pub fn adapt<T: FromModelFields>(payload: &str) -> T {
    match parse_object(payload) {
        Ok(fields) => T::from_fields(&fields),
        Err(e) => {
            warn!("Could not parse {} extraction, continuing with empty fields: {:#}", T::KIND, e);
            T::default()
        }
    }
}

/// Locate and parse the JSON object inside a model response
pub fn parse_object(payload: &str) -> anyhow::Result<Map<String, Value>> {
    let start = payload.find('{').ok_or_else(|| anyhow!("no JSON object in model output"))?;
    let end = payload
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| anyhow!("unterminated JSON object in model output"))?;

    let value: Value = serde_json::from_str(&payload[start..=end]).context("model output is not valid JSON")?;

    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(anyhow!("expected a JSON object, found {}", json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    fields.get(key).map(flatten_text).unwrap_or_default()
}

fn list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(items)) => non_empty_items(items),
        Some(value) => {
            let text = flatten_text(value);
            if text.trim().is_empty() {
                Vec::new()
            } else {
                vec![text]
            }
        }
        None => Vec::new(),
    }
}

fn text_or_list_field(fields: &Map<String, Value>, key: &str) -> TextOrList {
    match fields.get(key) {
        Some(Value::Array(items)) => TextOrList::List(non_empty_items(items)),
        Some(value) => TextOrList::Text(flatten_text(value)),
        None => TextOrList::default(),
    }
}

fn non_empty_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(flatten_text)
        .filter(|item| !item.trim().is_empty())
        .collect()
}

/// Render any JSON value as plain text; nested values are joined with ", "
fn flatten_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => join_non_empty(items.iter()),
        Value::Object(map) => join_non_empty(map.values()),
    }
}

fn join_non_empty<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values
        .map(flatten_text)
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
