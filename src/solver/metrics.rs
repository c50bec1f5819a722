//! Guess metrics over the pattern matrix
//!
//! Every metric is a function of the bucket sizes a guess produces against a
//! target set:
//! - entropy: expected information in bits (higher is better)
//! - expected remaining: expected surviving targets, Σ count² / |targets|
//!   (lower is better)
//! - column length: expected product of distinct letters per position within
//!   the surviving bucket (lower is better)
//!
//! Metrics against the whole vocabulary are computed once, when the engine is
//! created. While a target set is still close to the whole vocabulary
//! (`|targets| / N >= full_cache_ratio`) those cached values are returned as an
//! approximation; smaller sets are evaluated exactly.

use super::buckets::{BucketDistribution, BucketTally};
use crate::config::SolverConfig;
use crate::error::WordleError;
use crate::matrix::PatternMatrix;
use crate::vocabulary::{CompactWordSet, WordId};
use log::{debug, info};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

/// All metrics for evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining targets after this guess
    pub expected_remaining: f64,
    /// Expected column length of the surviving bucket
    pub column_length: f64,
    /// Largest bucket size (worst-case remaining targets)
    pub max_bucket: usize,
}

/// A single score a guess can be ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Maximize entropy
    Entropy,
    /// Minimize expected remaining targets
    Reduction,
    /// Minimize expected column length
    ColumnLength,
}

impl Metric {
    /// True when larger scores are better
    #[must_use]
    pub const fn maximizes(self) -> bool {
        matches!(self, Self::Entropy)
    }

    /// Extract this metric's score from a full set of metrics
    #[must_use]
    pub const fn score(self, metrics: &GuessMetrics) -> f64 {
        match self {
            Self::Entropy => metrics.entropy,
            Self::Reduction => metrics.expected_remaining,
            Self::ColumnLength => metrics.column_length,
        }
    }

    /// `Greater` when score `a` is better than score `b` under this metric
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let ordering = a.total_cmp(&b);
        if self.maximizes() {
            ordering
        } else {
            ordering.reverse()
        }
    }

    const fn needs_letters(self) -> bool {
        matches!(self, Self::ColumnLength)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => f.write_str("entropy"),
            Self::Reduction => f.write_str("expected remaining"),
            Self::ColumnLength => f.write_str("column length"),
        }
    }
}

/// Which evaluation a query against a target set takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationPath {
    /// Whole-vocabulary values computed at construction
    Cached,
    /// Recomputed against the literal target set
    Exact,
}

/// Metric queries against one pattern matrix
#[derive(Debug, Clone)]
pub struct MetricEngine<'m> {
    matrix: &'m PatternMatrix,
    config: SolverConfig,
    full: Vec<GuessMetrics>,
}

impl<'m> MetricEngine<'m> {
    /// Create an engine and precompute every guess against the whole vocabulary
    #[must_use]
    pub fn new(matrix: &'m PatternMatrix, config: SolverConfig) -> Self {
        let start = Instant::now();
        let all = CompactWordSet::all(matrix.len());
        let word_len = matrix.word_len();
        let ids = 0..matrix.len() as WordId;

        let full: Vec<GuessMetrics> = if matrix.len() > config.parallel_build_threshold {
            ids.into_par_iter()
                .map_init(
                    || BucketTally::new(word_len),
                    |tally, guess| full_metrics(matrix, tally, guess, &all),
                )
                .collect()
        } else {
            let mut tally = BucketTally::new(word_len);
            ids.map(|guess| full_metrics(matrix, &mut tally, guess, &all))
                .collect()
        };

        info!(
            "Cached whole-vocabulary metrics for {} guesses in {:.2?}",
            full.len(),
            start.elapsed()
        );

        Self {
            matrix,
            config,
            full,
        }
    }

    /// The matrix this engine reads
    #[must_use]
    pub const fn matrix(&self) -> &'m PatternMatrix {
        self.matrix
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Path a query against `targets` would take
    #[must_use]
    pub fn path_for(&self, targets: &CompactWordSet) -> EvaluationPath {
        let ratio = self.known_targets(targets) as f64 / self.matrix.len() as f64;
        if ratio >= self.config.full_cache_ratio {
            EvaluationPath::Cached
        } else {
            EvaluationPath::Exact
        }
    }

    /// Whole-vocabulary metrics of a guess, or `None` for an unknown id
    #[must_use]
    pub fn cached_metrics(&self, guess: WordId) -> Option<&GuessMetrics> {
        self.full.get(guess as usize)
    }

    /// Metrics of `guess` against `targets`, cached or exact per [`Self::path_for`]
    ///
    /// # Errors
    /// - [`WordleError::EmptyTargets`] if no target id is in the vocabulary
    /// - [`WordleError::UnknownWordId`] if `guess` is not in the vocabulary
    pub fn metrics(
        &self,
        guess: WordId,
        targets: &CompactWordSet,
    ) -> Result<GuessMetrics, WordleError> {
        self.check_targets(targets)?;
        match self.path_for(targets) {
            EvaluationPath::Cached => self
                .cached_metrics(guess)
                .copied()
                .ok_or(WordleError::UnknownWordId(guess)),
            EvaluationPath::Exact => self.exact_metrics(guess, targets),
        }
    }

    /// Metrics of `guess` computed against exactly `targets`
    ///
    /// # Errors
    /// Same as [`Self::metrics`].
    pub fn exact_metrics(
        &self,
        guess: WordId,
        targets: &CompactWordSet,
    ) -> Result<GuessMetrics, WordleError> {
        self.check_targets(targets)?;
        let mut tally = self.new_tally();
        self.tally_into(&mut tally, guess, targets, true)
            .ok_or(WordleError::UnknownWordId(guess))?;
        Ok(metrics_of(&tally))
    }

    /// Shannon entropy of `guess` against `targets`
    ///
    /// # Errors
    /// Same as [`Self::metrics`].
    pub fn entropy(&self, guess: WordId, targets: &CompactWordSet) -> Result<f64, WordleError> {
        self.score(Metric::Entropy, guess, targets)
    }

    /// Expected remaining targets after guessing `guess`
    ///
    /// # Errors
    /// Same as [`Self::metrics`].
    pub fn expected_reduction(
        &self,
        guess: WordId,
        targets: &CompactWordSet,
    ) -> Result<f64, WordleError> {
        self.score(Metric::Reduction, guess, targets)
    }

    /// Expected column length after guessing `guess`
    ///
    /// # Errors
    /// Same as [`Self::metrics`].
    pub fn expected_column_length(
        &self,
        guess: WordId,
        targets: &CompactWordSet,
    ) -> Result<f64, WordleError> {
        self.score(Metric::ColumnLength, guess, targets)
    }

    /// One metric of `guess` against `targets`
    ///
    /// # Errors
    /// Same as [`Self::metrics`].
    pub fn score(
        &self,
        metric: Metric,
        guess: WordId,
        targets: &CompactWordSet,
    ) -> Result<f64, WordleError> {
        self.check_targets(targets)?;
        let path = self.path_for(targets);
        let mut tally = self.new_tally();
        self.score_with(&mut tally, metric, guess, targets, path)
            .ok_or(WordleError::UnknownWordId(guess))
    }

    /// Bucket sizes of `guess` against exactly `targets`
    ///
    /// # Errors
    /// Same as [`Self::metrics`].
    pub fn bucket_distribution(
        &self,
        guess: WordId,
        targets: &CompactWordSet,
    ) -> Result<BucketDistribution, WordleError> {
        self.check_targets(targets)?;
        let mut tally = self.new_tally();
        self.tally_into(&mut tally, guess, targets, false)
            .ok_or(WordleError::UnknownWordId(guess))?;
        Ok(BucketDistribution::from_tally(&tally))
    }

    /// Reject target sets with no id inside the vocabulary
    pub(crate) fn check_targets(&self, targets: &CompactWordSet) -> Result<(), WordleError> {
        if self.known_targets(targets) > 0 {
            Ok(())
        } else {
            Err(WordleError::EmptyTargets)
        }
    }

    /// Target ids inside the vocabulary; ids are sorted, so this is a search
    fn known_targets(&self, targets: &CompactWordSet) -> usize {
        let n = self.matrix.len();
        targets.as_slice().partition_point(|&t| (t as usize) < n)
    }

    pub(crate) fn new_tally(&self) -> BucketTally {
        BucketTally::new(self.matrix.word_len())
    }

    /// Score one guess, reusing `tally`; `None` for an unknown guess id
    pub(crate) fn score_with(
        &self,
        tally: &mut BucketTally,
        metric: Metric,
        guess: WordId,
        targets: &CompactWordSet,
        path: EvaluationPath,
    ) -> Option<f64> {
        match path {
            EvaluationPath::Cached => self.cached_metrics(guess).map(|m| metric.score(m)),
            EvaluationPath::Exact => {
                self.tally_into(tally, guess, targets, metric.needs_letters())?;
                Some(match metric {
                    Metric::Entropy => tally.entropy(),
                    Metric::Reduction => tally.expected_remaining(),
                    Metric::ColumnLength => tally.column_length(),
                })
            }
        }
    }

    fn tally_into(
        &self,
        tally: &mut BucketTally,
        guess: WordId,
        targets: &CompactWordSet,
        track_letters: bool,
    ) -> Option<usize> {
        let row = self.matrix.row(guess)?;
        let words = track_letters.then(|| self.matrix.index().words());
        let counted = tally.tally(row, targets, words);
        if tally.skipped() > 0 {
            debug!(
                "Guess id {guess}: {} targets have codes longer than the vocabulary word length",
                tally.skipped()
            );
        }
        Some(counted)
    }
}

fn full_metrics(
    matrix: &PatternMatrix,
    tally: &mut BucketTally,
    guess: WordId,
    all: &CompactWordSet,
) -> GuessMetrics {
    if let Some(row) = matrix.row(guess) {
        tally.tally(row, all, Some(matrix.index().words()));
    }
    metrics_of(tally)
}

fn metrics_of(tally: &BucketTally) -> GuessMetrics {
    GuessMetrics {
        entropy: tally.entropy(),
        expected_remaining: tally.expected_remaining(),
        column_length: tally.column_length(),
        max_bucket: tally.max_bucket(),
    }
}
