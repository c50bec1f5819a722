//! Main solver interface
//!
//! Word-level facade over the metric engine: resolves raw words, applies guess
//! history to a target set and turns selections back into words. Unknown words
//! from the caller become explicit errors here.

use super::metrics::{GuessMetrics, MetricEngine};
use super::selector::{Selection, rank};
use super::strategy::{Strategy, StrategyType};
use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::error::WordleError;
use crate::matrix::PatternMatrix;
use crate::vocabulary::{CandidateIndex, CompactWordSet};
use log::debug;

/// A suggested guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'m> {
    pub word: &'m Word,
    pub score: f64,
    /// Targets still possible when the suggestion was made
    pub remaining: usize,
}

/// Main Wordle solver
///
/// Coordinates the solving process using a given strategy.
#[derive(Debug)]
pub struct Solver<'m, S: Strategy = StrategyType> {
    engine: MetricEngine<'m>,
    strategy: S,
}

impl<'m, S: Strategy> Solver<'m, S> {
    /// Create a solver over a built matrix
    pub fn new(matrix: &'m PatternMatrix, config: SolverConfig, strategy: S) -> Self {
        Self {
            engine: MetricEngine::new(matrix, config),
            strategy,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &MetricEngine<'m> {
        &self.engine
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn index(&self) -> &'m CandidateIndex {
        self.engine.matrix().index()
    }

    /// Every vocabulary word, as the target set of a fresh game
    #[must_use]
    pub fn all_targets(&self) -> CompactWordSet {
        CompactWordSet::all(self.engine.matrix().len())
    }

    /// Targets consistent with `observed` after guessing `guess`
    ///
    /// # Errors
    /// - [`WordleError::UnknownWord`] if `guess` is not in the vocabulary
    /// - [`WordleError::InvalidPattern`] if `observed` has the wrong length
    pub fn narrow(
        &self,
        targets: &CompactWordSet,
        guess: &str,
        observed: &Pattern,
    ) -> Result<CompactWordSet, WordleError> {
        let matrix = self.engine.matrix();
        let guess_id = matrix.index().resolve(guess)?;
        if observed.len() != matrix.word_len() {
            return Err(WordleError::InvalidPattern(format!(
                "'{observed}' has {} marks, expected {}",
                observed.len(),
                matrix.word_len()
            )));
        }

        let next = targets.filter_by_pattern(matrix, guess_id, observed.encode());
        debug!(
            "{guess} {observed}: {} -> {} targets",
            targets.len(),
            next.len()
        );
        Ok(next)
    }

    /// Targets consistent with every (guess, pattern) pair in `history`
    ///
    /// # Errors
    /// Same as [`Solver::narrow`].
    pub fn candidates_after(
        &self,
        history: &[(Word, Pattern)],
    ) -> Result<CompactWordSet, WordleError> {
        history
            .iter()
            .try_fold(self.all_targets(), |targets, (guess, observed)| {
                self.narrow(&targets, guess.text(), observed)
            })
    }

    /// Best guess from `candidates` against `targets` under the strategy
    ///
    /// # Errors
    /// Returns [`WordleError::EmptyCandidates`] or [`WordleError::EmptyTargets`]
    /// for degenerate sets.
    pub fn suggest(
        &self,
        candidates: &CompactWordSet,
        targets: &CompactWordSet,
    ) -> Result<Suggestion<'m>, WordleError> {
        let selection = self.strategy.select(&self.engine, candidates, targets)?;
        self.to_suggestion(selection, targets)
    }

    /// Get the next best guess given previous guesses and patterns
    ///
    /// Any vocabulary word may be suggested. When a single target remains it is
    /// suggested directly.
    ///
    /// # Errors
    /// - errors of [`Solver::candidates_after`]
    /// - [`WordleError::EmptyTargets`] if the history rules out every word
    pub fn next_guess(&self, history: &[(Word, Pattern)]) -> Result<Suggestion<'m>, WordleError> {
        let targets = self.candidates_after(history)?;

        if targets.len() == 1 {
            return self.suggest(&targets, &targets);
        }

        self.suggest(&self.all_targets(), &targets)
    }

    /// The `k` best guesses from `candidates` against `targets`, best first
    ///
    /// # Errors
    /// Same as [`Solver::suggest`].
    pub fn rank(
        &self,
        candidates: &CompactWordSet,
        targets: &CompactWordSet,
        k: usize,
    ) -> Result<Vec<Suggestion<'m>>, WordleError> {
        rank(&self.engine, self.strategy.metric(), candidates, targets, k)?
            .into_iter()
            .map(|selection| self.to_suggestion(selection, targets))
            .collect()
    }

    /// Every metric of `word` against `targets`
    ///
    /// # Errors
    /// - [`WordleError::UnknownWord`] if `word` is not in the vocabulary
    /// - [`WordleError::EmptyTargets`] for an empty target set
    pub fn analyze(
        &self,
        word: &str,
        targets: &CompactWordSet,
    ) -> Result<GuessMetrics, WordleError> {
        let id = self.index().resolve(word)?;
        self.engine.metrics(id, targets)
    }

    /// Pattern of `guess` against `target`, read from the matrix
    ///
    /// # Errors
    /// Returns [`WordleError::UnknownWord`] if either word is not in the
    /// vocabulary.
    pub fn pattern_of(&self, guess: &str, target: &str) -> Result<Pattern, WordleError> {
        let matrix = self.engine.matrix();
        let guess_id = matrix.index().resolve(guess)?;
        let target_id = matrix.index().resolve(target)?;
        let code = matrix
            .get(guess_id, target_id)
            .ok_or(WordleError::UnknownWordId(target_id))?;
        Ok(code.decode(matrix.word_len()))
    }

    fn to_suggestion(
        &self,
        selection: Selection,
        targets: &CompactWordSet,
    ) -> Result<Suggestion<'m>, WordleError> {
        let word = self
            .index()
            .word_of(selection.id)
            .ok_or(WordleError::UnknownWordId(selection.id))?;
        Ok(Suggestion {
            word,
            score: selection.score,
            remaining: targets.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{EntropyStrategy, ReductionStrategy};

    const WORDS: [&str; 6] = ["crane", "slate", "irate", "crate", "grate", "steel"];

    fn setup_matrix() -> PatternMatrix {
        PatternMatrix::build_sequential(CandidateIndex::from_strs(&WORDS).unwrap())
    }

    fn history(pairs: &[(&str, &str)]) -> Vec<(Word, Pattern)> {
        pairs
            .iter()
            .map(|&(w, p)| (Word::new(w).unwrap(), p.parse().unwrap()))
            .collect()
    }

    #[test]
    fn candidates_after_empty_history_is_everything() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), EntropyStrategy);

        assert_eq!(solver.candidates_after(&[]).unwrap(), solver.all_targets());
    }

    #[test]
    fn candidates_after_filters_by_history() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), EntropyStrategy);

        // SLATE against any ?RATE word: only A, T and E line up
        let after = solver
            .candidates_after(&history(&[("slate", "RRGGG")]))
            .unwrap();
        let words: Vec<&str> = after.words(solver.index()).collect();
        assert_eq!(words, vec!["irate", "crate", "grate"]);
    }

    #[test]
    fn narrow_uses_majority_length_when_first_word_is_short() {
        let words = ["cat", "slate", "crane", "trace", "stale"];
        let m = PatternMatrix::build_sequential(CandidateIndex::from_strs(&words).unwrap());
        let solver = Solver::new(&m, SolverConfig::default(), EntropyStrategy);

        let perfect: Pattern = "GGGGG".parse().unwrap();
        let after = solver.narrow(&solver.all_targets(), "slate", &perfect).unwrap();
        assert_eq!(after.words(solver.index()).collect::<Vec<_>>(), vec!["slate"]);
    }

    #[test]
    fn history_must_use_known_words_and_lengths() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), EntropyStrategy);

        let unknown = solver.candidates_after(&history(&[("zzzzz", "RRRRR")]));
        assert_eq!(unknown, Err(WordleError::UnknownWord("zzzzz".to_string())));

        let short: Pattern = "GGG".parse().unwrap();
        let err = solver.narrow(&solver.all_targets(), "slate", &short);
        assert!(matches!(err, Err(WordleError::InvalidPattern(_))));
    }

    #[test]
    fn next_guess_returns_last_target() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), ReductionStrategy);

        let steel = solver.pattern_of("crane", "steel").unwrap();
        let guess = solver
            .next_guess(&[(Word::new("crane").unwrap(), steel)])
            .unwrap();

        assert_eq!(guess.word.text(), "steel");
        assert_eq!(guess.remaining, 1);
    }

    #[test]
    fn next_guess_errors_when_history_is_contradictory() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), StrategyType::Entropy);

        let result = solver.next_guess(&history(&[("slate", "GGGGG"), ("crane", "GGGGG")]));
        assert_eq!(result, Err(WordleError::EmptyTargets));
    }

    #[test]
    fn suggest_and_rank_agree() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), StrategyType::Entropy);
        let all = solver.all_targets();

        let best = solver.suggest(&all, &all).unwrap();
        let ranked = solver.rank(&all, &all, 3).unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], best);
        assert_eq!(best.remaining, WORDS.len());
    }

    #[test]
    fn analyze_resolves_words() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), StrategyType::Entropy);
        let all = solver.all_targets();

        let metrics = solver.analyze("Crane", &all).unwrap();
        assert!(metrics.entropy > 0.0);
        assert!(metrics.expected_remaining >= 1.0);

        assert_eq!(
            solver.analyze("zzzzz", &all),
            Err(WordleError::UnknownWord("zzzzz".to_string()))
        );
    }

    #[test]
    fn pattern_of_reads_matrix() {
        let m = setup_matrix();
        let solver = Solver::new(&m, SolverConfig::default(), StrategyType::Entropy);

        let pattern = solver.pattern_of("steel", "slate").unwrap();
        let expected = crate::core::evaluate(
            &Word::new("steel").unwrap(),
            &Word::new("slate").unwrap(),
        )
        .unwrap();
        assert_eq!(pattern, expected);
    }
}
