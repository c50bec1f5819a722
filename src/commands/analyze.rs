//! Word analysis command
//!
//! Reports every metric of one word against a target set.

use crate::error::WordleError;
use crate::solver::{EvaluationPath, GuessMetrics, Solver, Strategy};
use crate::vocabulary::CompactWordSet;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub metrics: GuessMetrics,
    /// Distinct patterns the word produces against the targets
    pub distinct_patterns: usize,
    pub total_targets: usize,
    pub path: EvaluationPath,
}

impl AnalysisResult {
    /// Effective number of equally likely patterns, `2^entropy`
    ///
    /// Not the expected remaining count; that is `metrics.expected_remaining`.
    #[must_use]
    pub fn split_factor(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze a word against `targets`
///
/// # Errors
///
/// Returns an error if:
/// - The word is not in the solver's vocabulary
/// - `targets` is empty
pub fn analyze_word<S: Strategy>(
    solver: &Solver<'_, S>,
    word: &str,
    targets: &CompactWordSet,
) -> Result<AnalysisResult, WordleError> {
    let metrics = solver.analyze(word, targets)?;
    let id = solver.index().resolve(word)?;
    let distribution = solver.engine().bucket_distribution(id, targets)?;

    Ok(AnalysisResult {
        word: word.to_lowercase(),
        metrics,
        distinct_patterns: distribution.len(),
        total_targets: targets.len(),
        path: solver.engine().path_for(targets),
    })
}
