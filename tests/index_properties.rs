//! Property tests for fingerprint invariance and sub-multiset queries.

use anagram_core::core::fingerprint::fingerprint;
use anagram_core::core::subsets::enumerate_subset_products;
use anagram_core::{IndexError, PrimeTable, WordIndex};
use proptest::prelude::*;
use std::collections::BTreeSet;

const TABLE: PrimeTable = PrimeTable::STANDARD;

fn letter_strategy() -> impl Strategy<Value = char> {
    prop_oneof![proptest::char::range('A', 'Z'), proptest::char::range('a', 'z')]
}

fn word_strategy(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(letter_strategy(), 1..=max_len).prop_map(|cs| cs.into_iter().collect())
}

/// Letter counts of `word`, indexed by prime-table slot.
fn letter_counts(word: &str) -> [u8; 52] {
    let mut counts = [0u8; 52];
    for c in word.chars() {
        counts[PrimeTable::letter_index(c).unwrap()] += 1;
    }
    counts
}

fn is_sub_multiset(small: &str, big: &str) -> bool {
    let (s, b) = (letter_counts(small), letter_counts(big));
    s.iter().zip(b.iter()).all(|(x, y)| x <= y)
}

proptest! {
    #[test]
    fn test_fingerprint_permutation_invariant(
        (word, shuffled) in word_strategy(8).prop_flat_map(|w| {
            let letters: Vec<char> = w.chars().collect();
            (Just(w), Just(letters).prop_shuffle())
        }),
    ) {
        let shuffled: String = shuffled.into_iter().collect();
        prop_assert_eq!(fingerprint(&word, &TABLE).unwrap(), fingerprint(&shuffled, &TABLE).unwrap());
    }

    #[test]
    fn test_fingerprint_distinguishes_multisets(a in word_strategy(8), b in word_strategy(8)) {
        let same = letter_counts(&a) == letter_counts(&b);
        prop_assert_eq!(fingerprint(&a, &TABLE).unwrap() == fingerprint(&b, &TABLE).unwrap(), same);
    }

    #[test]
    fn test_enumeration_size(primes in proptest::collection::vec(prop::sample::select(TABLE.primes().to_vec()), 1..=8)) {
        let products = enumerate_subset_products(&primes).unwrap();
        prop_assert_eq!(products.len(), (1usize << primes.len()) - 1);
    }

    #[test]
    fn test_query_matches_brute_force(
        stored in proptest::collection::vec(word_strategy(4), 0..40),
        query in word_strategy(8),
    ) {
        let mut index = WordIndex::new();
        for w in &stored {
            index.insert(w).unwrap();
        }

        let found: Vec<&str> = index.query(&query).unwrap();
        let found_set: BTreeSet<&str> = found.iter().copied().collect();
        prop_assert_eq!(found.len(), found_set.len());

        let expected: BTreeSet<&str> = index.words().filter(|w| is_sub_multiset(w, &query)).collect();
        prop_assert_eq!(found_set, expected);
    }

    #[test]
    fn test_overlong_words_rejected(word in word_strategy(16).prop_filter("needs 9+ letters", |w| w.len() > 8)) {
        let mut index = WordIndex::new();
        let rejected = matches!(index.insert(&word), Err(IndexError::WordTooLong { .. }));
        prop_assert!(rejected);
        prop_assert!(index.query(&word).is_ok());
    }
}

#[test]
fn test_women_query() {
    let mut index = WordIndex::new();
    for w in ["wo", "wom", "me", "men", "man", "woman", "women"] {
        index.insert(w).unwrap();
    }
    let found: BTreeSet<&str> = index.query("women").unwrap().into_iter().collect();
    let expected: BTreeSet<&str> = ["wo", "wom", "me", "men", "women"].into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn test_permutation_contains_after_insert() {
    let mut index = WordIndex::new();
    index.insert("Rust").unwrap();
    assert!(index.contains("tsuR").unwrap());
    assert!(!index.contains("rust").unwrap());
}
