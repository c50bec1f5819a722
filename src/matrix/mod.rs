//! Precomputed guess × target pattern table
//!
//! `matrix[g][t]` is the code produced when word `g` is guessed against
//! target `t`. The table is built once per vocabulary, stored row-major at two
//! bytes per cell, and read-only afterwards, so any number of threads may query
//! it without locking. It is not symmetric.

mod builder;

pub use builder::BuildStrategy;

use crate::config::SolverConfig;
use crate::core::PatternCode;
use crate::vocabulary::{CandidateIndex, WordId};
use log::{info, warn};
use std::time::Instant;

/// Dense N×N table of pattern codes over one vocabulary
#[derive(Debug, Clone)]
pub struct PatternMatrix {
    index: CandidateIndex,
    cells: Vec<PatternCode>,
    failed_cells: usize,
    strategy: BuildStrategy,
}

impl PatternMatrix {
    /// Build with the strategy the config picks for this vocabulary size
    #[must_use]
    pub fn build(index: CandidateIndex, config: &SolverConfig) -> Self {
        let strategy = BuildStrategy::for_size(index.len(), config.parallel_build_threshold);
        Self::build_with(index, strategy)
    }

    /// Build on the calling thread
    #[must_use]
    pub fn build_sequential(index: CandidateIndex) -> Self {
        Self::build_with(index, BuildStrategy::Sequential)
    }

    /// Build with rows spread across the rayon pool
    #[must_use]
    pub fn build_parallel(index: CandidateIndex) -> Self {
        Self::build_with(index, BuildStrategy::Parallel)
    }

    /// Build with an explicit strategy
    ///
    /// Pairs that cannot be evaluated (words of a different length than the
    /// vocabulary's) are stored as all-Red and counted in
    /// [`PatternMatrix::failed_cells`]; the build always completes.
    #[must_use]
    pub fn build_with(index: CandidateIndex, strategy: BuildStrategy) -> Self {
        let start = Instant::now();
        let n = index.len();
        let fallback = PatternCode::all_red(index.word_len());
        let mut cells = vec![fallback; n * n];

        let failed_cells = builder::fill_cells(index.words(), &mut cells, fallback, strategy);

        if failed_cells > 0 {
            warn!("{failed_cells} of {} cells could not be evaluated", n * n);
        }
        info!(
            "Built {n}x{n} pattern matrix ({strategy}) in {:.2?}",
            start.elapsed()
        );

        Self {
            index,
            cells,
            failed_cells,
            strategy,
        }
    }

    /// Code for a guess/target id pair
    ///
    /// # Panics
    /// Panics if either id is outside `0..N`.
    #[inline]
    #[must_use]
    pub fn lookup(&self, guess: WordId, target: WordId) -> PatternCode {
        let n = self.len();
        assert!((target as usize) < n, "target id {target} out of range");
        self.cells[guess as usize * n + target as usize]
    }

    /// Code for a guess/target id pair, or `None` for an unknown id
    #[must_use]
    pub fn get(&self, guess: WordId, target: WordId) -> Option<PatternCode> {
        self.row(guess)?.get(target as usize).copied()
    }

    /// Code for a guess/target word pair, or `None` if either is unknown
    ///
    /// # Examples
    /// ```
    /// use wordle_matrix::core::Pattern;
    /// use wordle_matrix::matrix::PatternMatrix;
    /// use wordle_matrix::vocabulary::CandidateIndex;
    ///
    /// let index = CandidateIndex::from_strs(&["steel", "stale"]).unwrap();
    /// let matrix = PatternMatrix::build_sequential(index);
    ///
    /// let code = matrix.lookup_words("steel", "stale").unwrap();
    /// assert_eq!(code, "GGAXA".parse::<Pattern>().unwrap().encode());
    /// assert!(matrix.lookup_words("steel", "zzzzz").is_none());
    /// ```
    #[must_use]
    pub fn lookup_words(&self, guess: &str, target: &str) -> Option<PatternCode> {
        let guess = self.index.id_of(guess)?;
        let target = self.index.id_of(target)?;
        self.get(guess, target)
    }

    /// All codes of one guess, indexed by target id
    #[inline]
    #[must_use]
    pub fn row(&self, guess: WordId) -> Option<&[PatternCode]> {
        let n = self.len();
        let start = guess as usize * n;
        self.cells.get(start..start + n)
    }

    /// The index the matrix was built over
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &CandidateIndex {
        &self.index
    }

    /// Vocabulary size (N)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false; the index rejects empty vocabularies
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Vocabulary word length (L)
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.index.word_len()
    }

    /// Number of cells holding the fallback code because evaluation failed
    #[must_use]
    pub const fn failed_cells(&self) -> usize {
        self.failed_cells
    }

    /// Strategy used for the build
    #[must_use]
    pub const fn strategy(&self) -> BuildStrategy {
        self.strategy
    }

    /// Bytes held by the code table
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(self.cells.as_slice())
    }

    /// True when both matrices hold the same words and the same codes
    #[must_use]
    pub fn same_codes(&self, other: &Self) -> bool {
        self.index.words() == other.index.words() && self.cells == other.cells
    }
}
