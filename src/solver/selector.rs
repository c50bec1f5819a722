//! Best-guess selection
//!
//! Scores every candidate guess under one metric and keeps the extremal one.
//! Ties go to the candidate that comes first in the candidate set's ascending
//! id order, in both the sequential and the parallel variant.

use super::metrics::{EvaluationPath, Metric, MetricEngine};
use crate::error::WordleError;
use crate::vocabulary::{CompactWordSet, WordId};
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A chosen guess and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub id: WordId,
    pub score: f64,
}

/// Select the best guess, in parallel for wide candidate sets
///
/// Runs [`select_best_parallel`] once `candidates` reaches the engine's
/// `parallel_query_threshold`, otherwise [`select_best_sequential`].
///
/// # Errors
/// - [`WordleError::EmptyCandidates`] if no candidate id is in the vocabulary
/// - [`WordleError::EmptyTargets`] if no target id is in the vocabulary
pub fn select_best(
    engine: &MetricEngine<'_>,
    metric: Metric,
    candidates: &CompactWordSet,
    targets: &CompactWordSet,
) -> Result<Selection, WordleError> {
    if candidates.len() >= engine.config().parallel_query_threshold {
        select_best_parallel(engine, metric, candidates, targets)
    } else {
        select_best_sequential(engine, metric, candidates, targets)
    }
}

/// Select the best guess on the calling thread
///
/// Unknown candidate ids are skipped.
///
/// # Errors
/// Same as [`select_best`].
pub fn select_best_sequential(
    engine: &MetricEngine<'_>,
    metric: Metric,
    candidates: &CompactWordSet,
    targets: &CompactWordSet,
) -> Result<Selection, WordleError> {
    let path = prepare(engine, metric, candidates, targets)?;
    let mut tally = engine.new_tally();
    let mut best: Option<Selection> = None;

    for id in candidates {
        let Some(score) = engine.score_with(&mut tally, metric, id, targets, path) else {
            continue;
        };
        // Strictly better only, so the earliest of equal scores stays
        if best.is_none_or(|b| metric.compare(score, b.score) == Ordering::Greater) {
            best = Some(Selection { id, score });
        }
    }

    best.ok_or(WordleError::EmptyCandidates)
}

/// Select the best guess with candidates scored across the rayon pool
///
/// Each worker reuses its own bucket tally; the matrix and both sets are only
/// read. Returns the same selection as [`select_best_sequential`].
///
/// # Errors
/// Same as [`select_best`].
pub fn select_best_parallel(
    engine: &MetricEngine<'_>,
    metric: Metric,
    candidates: &CompactWordSet,
    targets: &CompactWordSet,
) -> Result<Selection, WordleError> {
    let path = prepare(engine, metric, candidates, targets)?;

    candidates
        .as_slice()
        .par_iter()
        .enumerate()
        .map_init(
            || engine.new_tally(),
            |tally, (position, &id)| {
                engine
                    .score_with(tally, metric, id, targets, path)
                    .map(|score| (position, Selection { id, score }))
            },
        )
        .flatten()
        .reduce_with(|a, b| if outranks(metric, &b, &a) { b } else { a })
        .map(|(_, selection)| selection)
        .ok_or(WordleError::EmptyCandidates)
}

/// The `k` best candidates, best first, ties in candidate order
///
/// # Errors
/// Same as [`select_best`].
pub fn rank(
    engine: &MetricEngine<'_>,
    metric: Metric,
    candidates: &CompactWordSet,
    targets: &CompactWordSet,
    k: usize,
) -> Result<Vec<Selection>, WordleError> {
    let path = prepare(engine, metric, candidates, targets)?;

    let mut scored: Vec<Selection> = candidates
        .as_slice()
        .par_iter()
        .map_init(
            || engine.new_tally(),
            |tally, &id| {
                engine
                    .score_with(tally, metric, id, targets, path)
                    .map(|score| Selection { id, score })
            },
        )
        .flatten()
        .collect();

    if scored.is_empty() {
        return Err(WordleError::EmptyCandidates);
    }

    // Stable sort keeps candidate order among equal scores
    scored.sort_by(|a, b| metric.compare(b.score, a.score));
    scored.truncate(k);
    Ok(scored)
}

fn prepare(
    engine: &MetricEngine<'_>,
    metric: Metric,
    candidates: &CompactWordSet,
    targets: &CompactWordSet,
) -> Result<EvaluationPath, WordleError> {
    if candidates.is_empty() {
        return Err(WordleError::EmptyCandidates);
    }
    engine.check_targets(targets)?;

    let path = engine.path_for(targets);
    debug!(
        "Scoring {} candidates by {metric} against {} targets ({path:?})",
        candidates.len(),
        targets.len()
    );
    Ok(path)
}

/// True when `a` beats `b`: better score, or equal score and earlier position
fn outranks(metric: Metric, a: &(usize, Selection), b: &(usize, Selection)) -> bool {
    match metric.compare(a.1.score, b.1.score) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => a.0 < b.0,
    }
}
