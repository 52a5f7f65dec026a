// src/lib.rs

pub mod config;
pub mod core;
pub mod errors;
pub mod persistence;
pub mod wordlist;
pub use crate::core::engine::AnagramEngine;
pub use crate::core::index::WordIndex;
pub use crate::core::primes::PrimeTable;
pub use crate::errors::{IndexError, Result};
