//! Error taxonomy for the pattern library
//!
//! Hot-path lookups report absence through `Option`; everything a caller can
//! act on surfaces as a [`WordleError`].

use crate::core::WordError;
use crate::vocabulary::WordId;
use thiserror::Error;

/// Errors surfaced by the library to its callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordleError {
    /// Guess and target have different lengths and cannot be compared
    #[error("cannot compare '{guess}' with '{target}': word lengths differ")]
    LengthMismatch { guess: String, target: String },

    /// A raw string failed word validation
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// A raw word is not part of the loaded vocabulary
    #[error("word '{0}' is not in the vocabulary")]
    UnknownWord(String),

    /// An id outside `0..N` was passed to a single-guess query
    #[error("word id {0} is not in the vocabulary")]
    UnknownWordId(WordId),

    /// Selection was requested over an empty candidate set
    #[error("no candidate guesses to choose from")]
    EmptyCandidates,

    /// A metric was requested against an empty target set
    #[error("no possible targets remain")]
    EmptyTargets,

    /// A vocabulary with no words was supplied
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// A feedback string could not be parsed into a pattern
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// A strategy name that is not implemented
    #[error("unknown strategy '{0}' (expected entropy, reduction or column)")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = WordleError::LengthMismatch {
            guess: "crane".to_string(),
            target: "cranes".to_string(),
        };
        assert!(err.to_string().contains("crane"));
        assert!(err.to_string().contains("cranes"));

        let err = WordleError::UnknownWord("zzzzz".to_string());
        assert_eq!(err.to_string(), "word 'zzzzz' is not in the vocabulary");
    }

    #[test]
    fn word_errors_convert() {
        let err: WordleError = WordError::Empty.into();
        assert!(matches!(err, WordleError::InvalidWord(WordError::Empty)));
    }
}
