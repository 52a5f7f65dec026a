// File: src/core/subsets.rs
use crate::core::bounded::StaticVec;
use crate::core::types::{Fingerprint, MAX_SUBSETS, MAX_WORD_LEN};
use crate::errors::{IndexError, Result};

/// Products of every non-empty positional subset of up to [`MAX_WORD_LEN`] letter primes.
pub type SubsetProducts = StaticVec<Fingerprint, MAX_SUBSETS>;

/// Returns the `2^n - 1` products of every non-empty subset of positions in `primes`.
///
/// Works by doubling: after slots `0..i` have been processed the buffer holds the
/// `2^i - 1` products of their subsets. Slot `i` then contributes `primes[i]` on its
/// own, followed by each of those earlier products multiplied by `primes[i]`.
/// Positions with equal primes still produce separate entries, so the output may
/// repeat values. Callers must not depend on the order.
pub fn enumerate_subset_products(primes: &[u64]) -> Result<SubsetProducts> {
    if primes.len() > MAX_WORD_LEN {
        return Err(IndexError::WordTooLong {
            word: format!("<{} letter primes>", primes.len()),
            len: primes.len(),
        });
    }

    let mut products = SubsetProducts::new();
    for &prime in primes {
        let base = products.len();
        products.push(prime)?;
        for i in 0..base {
            products.push(products.at(i)? * prime)?;
        }
    }
    Ok(products)
}
