// File: src/errors.rs
//! Error types for the anagram index.

/// Result type with [`IndexError`] as the default error.
pub type Result<T, E = IndexError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A character outside `A`-`Z` / `a`-`z` was looked up in the prime table.
    #[error("invalid letter symbol {0:?}: only A-Z and a-z are supported")]
    InvalidSymbol(char),

    /// The word has more letters than a 64-bit fingerprint can hold.
    #[error("length of {{{word}}} is {len}, exceeds maximum supported length (8 chars)")]
    WordTooLong { word: String, len: usize },

    #[error("empty word cannot be fingerprinted")]
    EmptyWord,

    /// Push into a full fixed-capacity buffer.
    #[error("bounded buffer is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("index {index} out of bounds for bounded buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Checked multiplication of letter primes wrapped past `u64::MAX`.
    #[error("fingerprint of {0:?} overflows u64")]
    FingerprintOverflow(String),

    #[error("incompatible index file format version {found} (expected {expected})")]
    IncompatibleFormat { found: u32, expected: u32 },

    /// A word list line rejected under [`InvalidWordPolicy::Reject`](crate::config::InvalidWordPolicy).
    #[error("word list line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: Box<IndexError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] bincode::Error),

    #[error(transparent)]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

impl IndexError {
    /// Whether the error comes from malformed input rather than I/O or an internal fault.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            IndexError::InvalidSymbol(_) | IndexError::WordTooLong { .. } | IndexError::EmptyWord
        )
    }
}
