//! Vocabulary indexing and candidate subsets
//!
//! Every vocabulary word gets a dense id once; the rest of the library works on
//! ids and sorted id arrays instead of strings.

mod index;
mod word_set;

pub use index::{CandidateIndex, WordId};
pub use word_set::CompactWordSet;
