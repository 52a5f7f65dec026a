// src/core/types.rs

/// Order-invariant encoding of a word's letter multiset: the product of its letter primes.
pub type Fingerprint = u64;

/// Longest word whose fingerprint is guaranteed to fit in a `u64`.
///
/// The last prime in the table is 239 (for `'z'`) and 239^9 exceeds `u64::MAX`,
/// so a word of nine `'z'`s could not be represented.
pub const MAX_WORD_LEN: usize = 8;

/// Number of recognized letter symbols (`A`-`Z` followed by `a`-`z`).
pub const ALPHABET_SIZE: usize = 52;

/// Number of non-empty positional subsets of a `MAX_WORD_LEN`-letter word.
pub const MAX_SUBSETS: usize = (1 << MAX_WORD_LEN) - 1;
