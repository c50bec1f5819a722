//! Wordle pattern matrix
//!
//! Feedback evaluation with exact duplicate-letter semantics, a dense
//! precomputed guess × target pattern table, and entropy / expected-remaining /
//! column-length metrics for choosing the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_matrix::config::SolverConfig;
//! use wordle_matrix::matrix::PatternMatrix;
//! use wordle_matrix::solver::{Solver, StrategyType};
//! use wordle_matrix::vocabulary::CandidateIndex;
//!
//! let index = CandidateIndex::from_strs(&["slate", "crane", "trace", "stale"]).unwrap();
//! let config = SolverConfig::default();
//! let matrix = PatternMatrix::build(index, &config);
//!
//! let solver = Solver::new(&matrix, config, StrategyType::Entropy);
//! let all = solver.all_targets();
//! let best = solver.suggest(&all, &all).unwrap();
//! println!("{} ({:.3} bits)", best.word, best.score);
//! ```

// Core domain types
pub mod core;

// Dense ids and id sets
pub mod vocabulary;

// Precomputed pattern table
pub mod matrix;

// Metrics and guess selection
pub mod solver;

pub mod config;
pub mod error;
pub mod log;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
