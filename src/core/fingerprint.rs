// File: src/core/fingerprint.rs
use crate::core::primes::PrimeTable;
use crate::core::types::{Fingerprint, MAX_WORD_LEN};
use crate::errors::{IndexError, Result};

/// Rejects words that are empty or longer than [`MAX_WORD_LEN`] letters.
pub fn check_length(word: &str) -> Result<()> {
    let len = word.chars().count();
    if len > MAX_WORD_LEN {
        return Err(IndexError::WordTooLong { word: word.to_string(), len });
    }
    if len == 0 {
        return Err(IndexError::EmptyWord);
    }
    Ok(())
}

/// Product of the letter primes of `word`, identical for every permutation of its letters.
pub fn fingerprint(word: &str, table: &PrimeTable) -> Result<Fingerprint> {
    check_length(word)?;
    word.chars().try_fold(1, |product: Fingerprint, c| {
        product
            .checked_mul(table.prime_of(c)?)
            .ok_or_else(|| IndexError::FingerprintOverflow(word.to_string()))
    })
}

/// The prime of each letter of `word`, in word order.
pub fn letter_primes(word: &str, table: &PrimeTable) -> Result<Vec<u64>> {
    word.chars().map(|c| table.prime_of(c)).collect()
}
