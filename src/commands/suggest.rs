//! Suggestion command
//!
//! Applies a guess history and ranks the next guesses under a strategy.

use crate::core::{Pattern, Word};
use crate::error::WordleError;
use crate::solver::{Solver, Strategy};

/// Result of a suggestion query
pub struct SuggestResult {
    /// Targets still consistent with the history, in id order
    pub remaining: Vec<String>,
    /// Ranked guesses with their scores, best first
    pub suggestions: Vec<(String, f64)>,
}

/// Parse one `guess=PATTERN` history entry
///
/// # Errors
///
/// Returns an error if the entry has no `=`, the guess is not a valid word or
/// the pattern cannot be parsed.
///
/// # Examples
/// ```
/// use wordle_matrix::commands::parse_history_entry;
///
/// let (guess, pattern) = parse_history_entry("crane=RRGAX").unwrap();
/// assert_eq!(guess.text(), "crane");
/// assert_eq!(pattern.to_string(), "RRGAX");
/// ```
pub fn parse_history_entry(entry: &str) -> Result<(Word, Pattern), WordleError> {
    let (guess, pattern) = entry.split_once('=').ok_or_else(|| {
        WordleError::InvalidPattern(format!("expected guess=PATTERN, got '{entry}'"))
    })?;

    Ok((Word::new(guess.trim())?, pattern.trim().parse()?))
}

/// Rank the `top` best next guesses after `history`
///
/// Every vocabulary word is considered as a guess. When only one target is
/// left it is the sole suggestion.
///
/// # Errors
///
/// Returns an error if a history word is not in the vocabulary, a pattern has
/// the wrong length, or the history rules out every word.
pub fn suggest_next<S: Strategy>(
    solver: &Solver<'_, S>,
    history: &[(Word, Pattern)],
    top: usize,
) -> Result<SuggestResult, WordleError> {
    let targets = solver.candidates_after(history)?;
    let candidates = if targets.len() == 1 {
        targets.clone()
    } else {
        solver.all_targets()
    };

    let suggestions = solver
        .rank(&candidates, &targets, top.max(1))?
        .into_iter()
        .map(|s| (s.word.text().to_string(), s.score))
        .collect();

    Ok(SuggestResult {
        remaining: targets.words(solver.index()).map(str::to_string).collect(),
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::matrix::PatternMatrix;
    use crate::solver::StrategyType;
    use crate::vocabulary::CandidateIndex;

    const WORDS: [&str; 6] = ["crane", "slate", "irate", "crate", "grate", "steel"];

    fn matrix() -> PatternMatrix {
        PatternMatrix::build_sequential(CandidateIndex::from_strs(&WORDS).unwrap())
    }

    #[test]
    fn parse_history_entry_accepts_letters_and_emoji() {
        let (guess, pattern) = parse_history_entry(" Slate = 🟩⬜🟨🟩⬜ ").unwrap();
        assert_eq!(guess.text(), "slate");
        assert_eq!(pattern.to_string(), "GRAGR");
    }

    #[test]
    fn parse_history_entry_rejects_malformed() {
        assert!(matches!(
            parse_history_entry("slate"),
            Err(WordleError::InvalidPattern(_))
        ));
        assert!(matches!(
            parse_history_entry("sl4te=GGGGG"),
            Err(WordleError::InvalidWord(_))
        ));
        assert!(parse_history_entry("slate=GGQGG").is_err());
    }

    #[test]
    fn suggest_from_scratch_ranks_top_k() {
        let m = matrix();
        let solver = Solver::new(&m, SolverConfig::default(), StrategyType::Entropy);

        let result = suggest_next(&solver, &[], 3).unwrap();

        assert_eq!(result.remaining.len(), WORDS.len());
        assert_eq!(result.suggestions.len(), 3);
        assert!(result.suggestions[0].1 >= result.suggestions[2].1);
    }

    #[test]
    fn suggest_after_history_narrows_targets() {
        let m = matrix();
        let solver = Solver::new(&m, SolverConfig::default(), StrategyType::Reduction);
        let history = vec![parse_history_entry("slate=RRGGG").unwrap()];

        let result = suggest_next(&solver, &history, 5).unwrap();

        assert_eq!(result.remaining, vec!["irate", "crate", "grate"]);
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn single_target_is_the_suggestion() {
        let m = matrix();
        let solver = Solver::new(&m, SolverConfig::default(), StrategyType::Entropy);
        let history = vec![parse_history_entry("crane=RRRRA").unwrap()];

        let result = suggest_next(&solver, &history, 5).unwrap();

        assert_eq!(result.remaining, vec!["steel"]);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].0, "steel");
    }
}
