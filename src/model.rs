use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Line counts keyed by language label or, for the unclassified bucket, by extension.
pub type LineTable = HashMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(rename = "sshUrl")]
    pub clone_url: String,
}

impl Repository {
    pub fn new(name: impl Into<String>, clone_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clone_url: clone_url.into(),
        }
    }
}

/// What a single repository contributes once all of its branches are counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoCounts {
    pub languages: LineTable,
    pub unclassified: LineTable,
    pub unparsed_lines: u64,
}

impl RepoCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_language(&mut self, language: &str, count: u64) {
        *self.languages.entry(language.to_string()).or_insert(0) += count;
    }

    pub fn add_unclassified(&mut self, key: &str, count: u64) {
        *self.unclassified.entry(key.to_string()).or_insert(0) += count;
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.unclassified.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    pub cloned: usize,
    pub updated: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub lines: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionEntry {
    pub extension: String,
    pub lines: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    pub repositories_counted: usize,
    pub repositories_failed: usize,
    pub unparsed_lines: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub workspace: String,
    pub output_svg: String,
    pub total_lines: u64,
    pub languages: Vec<LanguageEntry>,
    pub unclassified: Vec<ExtensionEntry>,
    pub diagnostics: Diagnostics,
}
