//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod pattern;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use pattern::{PatternResult, evaluate_pair};
pub use suggest::{SuggestResult, parse_history_entry, suggest_next};
