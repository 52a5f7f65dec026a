// src/core/mod.rs

pub mod bounded;
pub mod engine;
pub mod fingerprint;
pub mod index;
pub mod primes;
pub mod subsets;
pub mod types;
