//! Skill list normalization
//!
//! Models hand back skills either as one delimited string or as a list of
//! strings. [`TextOrList`] captures both shapes at the boundary and
//! [`SkillSet`] is the normalized form every scoring routine works on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A model field that may come back as one string or as a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::Text(String::new())
    }
}

impl TextOrList {
    pub fn is_empty(&self) -> bool {
        match self {
            TextOrList::Text(text) => text.trim().is_empty(),
            TextOrList::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }

    pub fn to_skill_set(&self) -> SkillSet {
        match self {
            TextOrList::Text(text) => SkillSet::from_delimited(text),
            TextOrList::List(items) => SkillSet::from_items(items),
        }
    }
}

impl fmt::Display for TextOrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrList::Text(text) => write!(f, "{}", text),
            TextOrList::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// Set of trimmed, lowercased skill names with no empty entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillSet {
    skills: BTreeSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split on commas, semicolons and newlines
    pub fn from_delimited(text: &str) -> Self {
        let unified = text.replace([';', '\n'], ",");
        Self::from_items(unified.split(','))
    }

    /// Each item is one skill; items are never split further
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills = items
            .into_iter()
            .filter_map(|item| normalize_skill(item.as_ref()))
            .collect();
        Self { skills }
    }

    pub fn contains(&self, skill: &str) -> bool {
        match normalize_skill(skill) {
            Some(normalized) => self.skills.contains(&normalized),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Skills present in both sets, in sorted order
    pub fn intersection<'a>(&'a self, other: &'a SkillSet) -> impl Iterator<Item = &'a str> {
        self.skills.intersection(&other.skills).map(String::as_str)
    }

    /// Skills in `self` that `other` lacks, in sorted order
    pub fn difference<'a>(&'a self, other: &'a SkillSet) -> impl Iterator<Item = &'a str> {
        self.skills.difference(&other.skills).map(String::as_str)
    }
}

impl From<&TextOrList> for SkillSet {
    fn from(field: &TextOrList) -> Self {
        field.to_skill_set()
    }
}

fn normalize_skill(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_string_normalization() {
        let set = SkillSet::from_delimited("Python, Java;SQL\n  Rust  ,,");
        let skills: Vec<&str> = set.iter().collect();
        assert_eq!(skills, vec!["java", "python", "rust", "sql"]);
    }

    #[test]
    fn test_list_items_not_split() {
        let set = SkillSet::from_items(["Web Development", "C++, C#", "  SQL "]);
        assert!(set.contains("web development"));
        assert!(set.contains("c++, c#"));
        assert!(!set.contains("c++"));
        assert!(set.contains("sql"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty_inputs_give_empty_set() {
        assert!(SkillSet::from_delimited("").is_empty());
        assert!(SkillSet::from_delimited(" ,; \n ").is_empty());
        assert!(SkillSet::from_items(Vec::<String>::new()).is_empty());
        assert!(TextOrList::default().to_skill_set().is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = SkillSet::from_delimited("python, Python, PYTHON ");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_text_or_list_untagged_deserialization() {
        let text: TextOrList = serde_json::from_str("\"Go, Rust\"").unwrap();
        assert_eq!(text, TextOrList::Text("Go, Rust".to_string()));

        let list: TextOrList = serde_json::from_str("[\"Go\", \"Rust\"]").unwrap();
        assert_eq!(list, TextOrList::List(vec!["Go".to_string(), "Rust".to_string()]));
        assert_eq!(text.to_skill_set(), list.to_skill_set());
    }

    #[test]
    fn test_text_or_list_emptiness() {
        assert!(TextOrList::Text("   ".to_string()).is_empty());
        assert!(TextOrList::List(vec![" ".to_string()]).is_empty());
        assert!(!TextOrList::List(vec!["docker".to_string()]).is_empty());
    }

    #[test]
    fn test_intersection_and_difference() {
        let required = SkillSet::from_delimited("python, java, sql");
        let candidate = SkillSet::from_items(["Python", "C++", "sql"]);

        let matched: Vec<&str> = required.intersection(&candidate).collect();
        let missing: Vec<&str> = required.difference(&candidate).collect();
        assert_eq!(matched, vec!["python", "sql"]);
        assert_eq!(missing, vec!["java"]);
    }
}
