//! Matrix construction
//!
//! Rows are independent: row `g` holds the codes of guess `g` against every
//! target. The parallel build hands each worker whole rows, so no two workers
//! ever write the same cell and the evaluator carries no shared state.

use crate::core::{PatternCode, Word, evaluate};
use log::warn;
use rayon::prelude::*;
use std::fmt;

/// How the N×N table is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStrategy {
    /// One pass over all pairs on the calling thread
    Sequential,
    /// Rows partitioned across the rayon pool
    Parallel,
}

impl BuildStrategy {
    /// Parallel once the vocabulary is larger than `threshold`
    #[must_use]
    pub const fn for_size(vocabulary_len: usize, threshold: usize) -> Self {
        if vocabulary_len > threshold {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }
}

impl fmt::Display for BuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Parallel => f.write_str("parallel"),
        }
    }
}

/// Fill `cells` (row-major, `words.len()` columns) and return the number of
/// cells that fell back to `fallback`
pub(super) fn fill_cells(
    words: &[Word],
    cells: &mut [PatternCode],
    fallback: PatternCode,
    strategy: BuildStrategy,
) -> usize {
    let n = words.len();
    debug_assert_eq!(cells.len(), n * n);

    match strategy {
        BuildStrategy::Sequential => cells
            .chunks_mut(n)
            .zip(words)
            .map(|(row, guess)| fill_row(guess, words, row, fallback))
            .sum(),
        BuildStrategy::Parallel => cells
            .par_chunks_mut(n)
            .zip(words.par_iter())
            .map(|(row, guess)| fill_row(guess, words, row, fallback))
            .sum(),
    }
}

/// Evaluate one guess against every target
///
/// A pair that cannot be evaluated gets `fallback`; the rest of the row is
/// still filled.
fn fill_row(
    guess: &Word,
    targets: &[Word],
    row: &mut [PatternCode],
    fallback: PatternCode,
) -> usize {
    let mut failures = 0;

    for (cell, target) in row.iter_mut().zip(targets) {
        *cell = match evaluate(guess, target) {
            Ok(pattern) => pattern.encode(),
            Err(err) => {
                warn!("{err}; storing fallback code {}", fallback.value());
                failures += 1;
                fallback
            }
        };
    }

    failures
}
