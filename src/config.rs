// File: src/config.rs
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// What to do with a word-list line that cannot be indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWordPolicy {
    /// Log the line and keep loading.
    #[default]
    Skip,
    /// Stop at the first bad line.
    Reject,
}

/// Engine settings, read from a JSON file. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Where the index is loaded from and saved to. `None` keeps it in memory only.
    pub index_path: Option<PathBuf>,
    /// Word lists loaded into the index at startup.
    pub wordlists: Vec<PathBuf>,
    pub invalid_words: InvalidWordPolicy,
    pub autosave: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_path: None,
            wordlists: Vec::new(),
            invalid_words: InvalidWordPolicy::Skip,
            autosave: true,
        }
    }
}

impl IndexConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
