//! Pattern command
//!
//! Evaluates one guess against one target without building a matrix.

use crate::core::{Pattern, PatternCode, Word, evaluate};
use crate::error::WordleError;

/// Result of evaluating one guess/target pair
pub struct PatternResult {
    pub guess: Word,
    pub target: Word,
    pub pattern: Pattern,
    pub code: PatternCode,
}

/// Evaluate `guess` against `target`
///
/// Neither word needs to be in a vocabulary.
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn evaluate_pair(guess: &str, target: &str) -> Result<PatternResult, WordleError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let pattern = evaluate(&guess, &target)?;

    Ok(PatternResult {
        code: pattern.encode(),
        guess,
        target,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_duplicate_letters() {
        let result = evaluate_pair("STEEL", "stale").unwrap();

        assert_eq!(result.guess.text(), "steel");
        assert_eq!(result.pattern.to_string(), "GGAXA");
        assert_eq!(result.code, result.pattern.encode());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            evaluate_pair("crane", "cranes"),
            Err(WordleError::LengthMismatch { .. })
        ));
        assert!(matches!(
            evaluate_pair("cr4ne", "crane"),
            Err(WordleError::InvalidWord(_))
        ));
    }
}
