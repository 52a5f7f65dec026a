// --- File: src/core/index.rs
use crate::core::fingerprint::{fingerprint, letter_primes};
use crate::core::primes::PrimeTable;
use crate::core::subsets::enumerate_subset_products;
use crate::core::types::{Fingerprint, MAX_WORD_LEN};
use crate::errors::Result;
use std::collections::HashMap;
use tracing::debug;

/// A word store keyed by letter multiset, answering "which stored words can be
/// spelled from these letters".
///
/// Only one word is kept per multiset: once `"stop"` is stored, inserting
/// `"pots"` is a no-op and `contains("tops")` is true.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: HashMap<Fingerprint, String>,
    table: PrimeTable,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::with_table(PrimeTable::STANDARD)
    }

    pub fn with_table(table: PrimeTable) -> Self {
        Self { words: HashMap::new(), table }
    }

    /// Stores `word` unless a permutation of it is already present.
    /// Returns whether the word was stored.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let key = fingerprint(word, &self.table)?;
        if let Some(existing) = self.words.get(&key) {
            debug!(word, existing = existing.as_str(), "letter multiset already stored, keeping first word");
            return Ok(false);
        }
        self.words.insert(key, word.to_string());
        Ok(true)
    }

    /// True when `word` or any permutation of it has been inserted.
    pub fn contains(&self, word: &str) -> Result<bool> {
        let key = fingerprint(word, &self.table)?;
        Ok(self.words.contains_key(&key))
    }

    /// The stored word sharing `word`'s letter multiset, if any.
    pub fn get(&self, word: &str) -> Result<Option<&str>> {
        let key = fingerprint(word, &self.table)?;
        Ok(self.words.get(&key).map(String::as_str))
    }

    /// Extends `sink` with every stored word whose letters are a sub-multiset of
    /// the letters of `word`.
    ///
    /// Unlike [`insert`](Self::insert), an over-long query is not rejected: only
    /// its first [`MAX_WORD_LEN`] letters are used.
    pub fn query_into<'a, S>(&'a self, word: &str, sink: &mut S) -> Result<()>
    where
        S: Extend<&'a str>,
    {
        let query: String = word.chars().take(MAX_WORD_LEN).collect();
        if query.is_empty() {
            return Ok(());
        }

        let primes = letter_primes(&query, &self.table)?;
        let mut keys = enumerate_subset_products(&primes)?.to_vec();
        // repeated letters yield the same product from different positions
        keys.sort_unstable();
        keys.dedup();

        debug!(query = query.as_str(), probes = keys.len(), "probing subset fingerprints");
        sink.extend(keys.iter().filter_map(|key| self.words.get(key).map(String::as_str)));
        Ok(())
    }

    pub fn query(&self, word: &str) -> Result<Vec<&str>> {
        let mut found = Vec::new();
        self.query_into(word, &mut found)?;
        Ok(found)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stored words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.values().map(String::as_str)
    }

    pub fn prime_table(&self) -> &PrimeTable {
        &self.table
    }
}
