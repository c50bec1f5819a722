//! Guess scoring and selection
//!
//! Bucket counting over matrix rows, the three metrics built on it, best-guess
//! selection and the word-level [`Solver`] facade.

mod buckets;
mod engine;
pub mod metrics;
pub mod selector;
pub mod strategy;

pub use buckets::{BucketDistribution, expected_remaining, shannon_entropy};
pub use engine::{Solver, Suggestion};
pub use metrics::{EvaluationPath, GuessMetrics, Metric, MetricEngine};
pub use selector::{Selection, rank, select_best, select_best_parallel, select_best_sequential};
pub use strategy::{
    ColumnLengthStrategy, EntropyStrategy, ReductionStrategy, Strategy, StrategyType,
};
