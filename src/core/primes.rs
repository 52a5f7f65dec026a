// File: src/core/primes.rs
use crate::core::types::ALPHABET_SIZE;
use crate::errors::{IndexError, Result};

const UC_FIRST: char = 'A';
const UC_LAST: char = 'Z';
const LC_FIRST: char = 'a';
const LC_LAST: char = 'z';

/// Primes the table is seeded with before trial division takes over.
const SEED_PRIMES: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

/// Bijection from the 52 letter symbols to the first 52 primes.
///
/// `'A'..='Z'` take slots 0-25 and `'a'..='z'` take slots 26-51, so `'A'` is 2,
/// `'a'` is 103 and `'z'` is 239. The table is built by a `const fn` and is
/// immutable afterwards; copy it or share it by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeTable {
    values: [u64; ALPHABET_SIZE],
}

impl PrimeTable {
    /// The table every index uses, evaluated at compile time.
    pub const STANDARD: PrimeTable = PrimeTable::new();

    pub const fn new() -> Self {
        let mut values = [0u64; ALPHABET_SIZE];
        let mut len = 0;
        while len < SEED_PRIMES.len() {
            values[len] = SEED_PRIMES[len];
            len += 1;
        }

        let mut candidate = values[len - 1] + 2;
        while len < ALPHABET_SIZE {
            if Self::is_prime(&values, len, candidate) {
                values[len] = candidate;
                len += 1;
            }
            candidate += 2;
        }

        Self { values }
    }

    /// Trial division against the primes found so far. Every prime below the
    /// candidate is already present, so this is exact.
    const fn is_prime(found: &[u64; ALPHABET_SIZE], len: usize, candidate: u64) -> bool {
        let mut i = 0;
        while i < len {
            if candidate % found[i] == 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Slot of `symbol` in the table.
    pub fn letter_index(symbol: char) -> Result<usize> {
        match symbol {
            UC_FIRST..=UC_LAST => Ok(symbol as usize - UC_FIRST as usize),
            LC_FIRST..=LC_LAST => Ok(symbol as usize - LC_FIRST as usize + 26),
            _ => Err(IndexError::InvalidSymbol(symbol)),
        }
    }

    pub fn prime_of(&self, symbol: char) -> Result<u64> {
        Self::letter_index(symbol).map(|idx| self.values[idx])
    }

    pub fn primes(&self) -> &[u64; ALPHABET_SIZE] {
        &self.values
    }
}

impl Default for PrimeTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
