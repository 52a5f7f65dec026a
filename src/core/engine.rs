use crate::config::IndexConfig;
use crate::core::index::WordIndex;
use crate::errors::{IndexError, Result};
use crate::persistence::{load_from_disk, save_to_disk};
use crate::wordlist::{load_wordlist_file, LoadReport};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// The engine owns one index plus the settings that decide where it lives on disk.
pub struct AnagramEngine {
    pub index: WordIndex,
    config: IndexConfig,
}

impl AnagramEngine {
    pub fn new() -> Self {
        Self::with_index(WordIndex::new(), IndexConfig::default())
    }

    fn with_index(index: WordIndex, config: IndexConfig) -> Self {
        Self { index, config }
    }

    /// Opens the index at `path`, starting empty when the file does not exist yet.
    pub fn from_file_or_new(path: &Path) -> Result<Self> {
        let config = IndexConfig { index_path: Some(path.to_path_buf()), ..IndexConfig::default() };
        Self::from_config(config)
    }

    /// Opens the configured index (if any) and loads every configured word list into it.
    pub fn from_config(config: IndexConfig) -> Result<Self> {
        let index = match &config.index_path {
            Some(path) => match load_from_disk(path) {
                Ok(index) => index,
                Err(IndexError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    info!(path = %path.display(), "no saved index, starting empty");
                    WordIndex::new()
                }
                Err(e) => return Err(e),
            },
            None => WordIndex::new(),
        };

        let mut engine = Self::with_index(index, config);
        let wordlists = engine.config.wordlists.clone();
        for path in &wordlists {
            engine.load_wordlist(path)?;
        }
        Ok(engine)
    }

    pub fn load_wordlist(&mut self, path: &Path) -> Result<LoadReport> {
        load_wordlist_file(&mut self.index, path, self.config.invalid_words)
    }

    /// Words the index can spell from the letters of `letters`, sorted for display.
    pub fn find(&self, letters: &str) -> Result<Vec<String>> {
        let mut found: Vec<String> = self.index.query(letters)?.into_iter().map(str::to_string).collect();
        found.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Ok(found)
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn index_path(&self) -> Option<&PathBuf> {
        self.config.index_path.as_ref()
    }

    pub fn save_index(&self) -> Result<()> {
        if let Some(path) = &self.config.index_path {
            save_to_disk(&self.index, path)
        } else {
            warn!("no index path configured, nothing saved");
            Ok(()) // Don't error if no path is set
        }
    }
}

impl Default for AnagramEngine {
    fn default() -> Self {
        Self::new()
    }
}
