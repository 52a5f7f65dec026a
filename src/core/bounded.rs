// File: src/core/bounded.rs
use crate::errors::{IndexError, Result};
use std::ops::Deref;

/// A fixed-capacity sequence backed by an inline array and a length counter.
///
/// Pushing past `N` and reading past the current length are reported as errors
/// instead of truncating or panicking.
#[derive(Clone, Copy)]
pub struct StaticVec<T: Copy + Default, const N: usize> {
    values: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> StaticVec<T, N> {
    pub fn new() -> Self {
        Self { values: [T::default(); N], len: 0 }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len == N {
            return Err(IndexError::CapacityExceeded { capacity: N });
        }
        self.values[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Checked access to an element that has already been pushed.
    pub fn at(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(IndexError::IndexOutOfBounds { index, len: self.len });
        }
        Ok(self.values[index])
    }

    pub fn last(&self) -> Result<T> {
        match self.len {
            0 => Err(IndexError::IndexOutOfBounds { index: 0, len: 0 }),
            len => Ok(self.values[len - 1]),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values[..self.len]
    }
}

impl<T: Copy + Default, const N: usize> Default for StaticVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy + Default + std::fmt::Debug, const N: usize> std::fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
