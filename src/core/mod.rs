//! Core domain types for word-guessing feedback
//!
//! This module contains the fundamental domain types and the pure feedback
//! evaluator. Nothing here allocates per evaluation or holds shared state.

mod evaluator;
mod feedback;
mod pattern;
mod word;

pub use evaluator::evaluate;
pub use feedback::Feedback;
pub use pattern::{Pattern, PatternCode};
pub(crate) use word::letter_index;
pub use word::{ALPHABET_SIZE, MAX_WORD_LEN, Word, WordError};
