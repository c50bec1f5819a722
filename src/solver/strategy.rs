//! Guess selection strategies
//!
//! Defines the Strategy trait and one named strategy per metric.

use super::metrics::{Metric, MetricEngine};
use super::selector::{Selection, select_best};
use crate::error::WordleError;
use crate::vocabulary::CompactWordSet;
use std::fmt;
use std::str::FromStr;

/// A strategy for selecting the best guess from a candidate set
pub trait Strategy {
    /// Metric this strategy ranks guesses by
    fn metric(&self) -> Metric;

    /// Select the best guess from `candidates` against `targets`
    ///
    /// # Errors
    /// Returns [`WordleError::EmptyCandidates`] or [`WordleError::EmptyTargets`]
    /// for degenerate sets.
    fn select(
        &self,
        engine: &MetricEngine<'_>,
        candidates: &CompactWordSet,
        targets: &CompactWordSet,
    ) -> Result<Selection, WordleError> {
        select_best(engine, self.metric(), candidates, targets)
    }
}

/// Pure entropy maximization
///
/// Always selects the guess with the highest Shannon entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn metric(&self) -> Metric {
        Metric::Entropy
    }
}

/// Expected remainder minimization
///
/// Selects the guess leaving the fewest targets on average.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReductionStrategy;

impl Strategy for ReductionStrategy {
    fn metric(&self) -> Metric {
        Metric::Reduction
    }
}

/// Column length minimization
///
/// Selects the guess whose surviving bucket has the fewest letter choices per
/// position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnLengthStrategy;

impl Strategy for ColumnLengthStrategy {
    fn metric(&self) -> Metric {
        Metric::ColumnLength
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyType {
    /// Maximize entropy (default)
    #[default]
    Entropy,
    /// Minimize expected remaining targets
    Reduction,
    /// Minimize expected column length
    ColumnLength,
}

impl Strategy for StrategyType {
    fn metric(&self) -> Metric {
        match self {
            Self::Entropy => EntropyStrategy.metric(),
            Self::Reduction => ReductionStrategy.metric(),
            Self::ColumnLength => ColumnLengthStrategy.metric(),
        }
    }
}

impl StrategyType {
    pub const ALL: [Self; 3] = [Self::Entropy, Self::Reduction, Self::ColumnLength];

    /// Create strategy from name string
    ///
    /// Supported names: "entropy" ("max-entropy"), "reduction"
    /// ("min-remaining", "expected-remaining"), "column" ("column-length").
    ///
    /// # Errors
    /// Returns [`WordleError::UnknownStrategy`] for any other name, including
    /// lookahead strategies such as "optimal" that are not implemented.
    pub fn from_name(name: &str) -> Result<Self, WordleError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "entropy" | "max-entropy" => Ok(Self::Entropy),
            "reduction" | "min-remaining" | "expected-remaining" => Ok(Self::Reduction),
            "column" | "column-length" => Ok(Self::ColumnLength),
            _ => Err(WordleError::UnknownStrategy(name.to_string())),
        }
    }

    /// Canonical name, accepted by [`StrategyType::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entropy => "entropy",
            Self::Reduction => "reduction",
            Self::ColumnLength => "column",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Entropy => "maximize information gain",
            Self::Reduction => "minimize expected remaining targets",
            Self::ColumnLength => "minimize letter choices per position",
        }
    }
}

impl FromStr for StrategyType {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
