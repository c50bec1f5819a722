//! End-to-end behaviour over the public API

use wordle_matrix::config::SolverConfig;
use wordle_matrix::core::{Feedback, Pattern, PatternCode, Word, evaluate};
use wordle_matrix::matrix::{BuildStrategy, PatternMatrix};
use wordle_matrix::solver::{
    Metric, MetricEngine, Solver, StrategyType, select_best_parallel, select_best_sequential,
};
use wordle_matrix::vocabulary::{CandidateIndex, CompactWordSet};
use wordle_matrix::wordlists::WORDS;

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn embedded_matrix() -> PatternMatrix {
    PatternMatrix::build(CandidateIndex::from_strs(WORDS).unwrap(), &SolverConfig::default())
}

#[test]
fn self_match_is_all_green() {
    let pattern = evaluate(&word("SLATE"), &word("SLATE")).unwrap();
    assert_eq!(pattern.to_string(), "GGGGG");
    assert!(pattern.is_perfect());

    for w in WORDS.iter().take(50) {
        assert!(evaluate(&word(w), &word(w)).unwrap().is_perfect());
    }
}

#[test]
fn duplicate_letter_goes_excess() {
    let pattern = evaluate(&word("STEEL"), &word("STALE")).unwrap();

    assert_eq!(
        pattern.marks(),
        &[
            Feedback::Green,
            Feedback::Green,
            Feedback::Amber,
            Feedback::Excess,
            Feedback::Amber,
        ]
    );
    assert_eq!(pattern.len(), 5);
}

#[test]
fn three_word_vocabulary_splits_perfectly() {
    let index = CandidateIndex::from_strs(&["slate", "crane", "trace"]).unwrap();
    let matrix = PatternMatrix::build_sequential(index);
    let engine = MetricEngine::new(&matrix, SolverConfig::default());
    let slate = matrix.index().id_of("SLATE").unwrap();
    let all = CompactWordSet::all(matrix.len());

    let distribution = engine.bucket_distribution(slate, &all).unwrap();
    assert_eq!(distribution.len(), 3);

    let entropy = engine.entropy(slate, &all).unwrap();
    assert!((entropy - 3f64.log2()).abs() < 1e-9);
    assert!((entropy - 1.585).abs() < 1e-3);
    assert!((engine.expected_reduction(slate, &all).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn uninformative_guess_has_zero_entropy() {
    let index = CandidateIndex::from_strs(&["zzzzz", "batch", "latch", "match", "hatch"]).unwrap();
    let matrix = PatternMatrix::build_sequential(index);
    let engine = MetricEngine::new(&matrix, SolverConfig::default());
    let targets = CompactWordSet::from_ids([1, 2, 3, 4]);

    let metrics = engine.exact_metrics(0, &targets).unwrap();
    assert!(metrics.entropy.abs() < 1e-12);
    assert!((metrics.expected_remaining - 4.0).abs() < 1e-12);
    assert_eq!(metrics.max_bucket, 4);
}

#[test]
fn filter_by_pattern_matches_brute_force() {
    let matrix = embedded_matrix();
    let index = matrix.index();
    let steel = index.id_of("STEEL").unwrap();
    let observed: Pattern = "GGAXA".parse().unwrap();

    let filtered =
        CompactWordSet::all(matrix.len()).filter_by_pattern(&matrix, steel, observed.encode());

    let guess = word("steel");
    let expected: CompactWordSet = index
        .iter()
        .filter(|(_, target)| evaluate(&guess, target).unwrap() == observed)
        .map(|(id, _)| id)
        .collect();

    assert_eq!(filtered, expected);
    assert!(filtered.contains(index.id_of("stale").unwrap()));
}

#[test]
fn every_code_round_trips() {
    for len in 1..=5 {
        for value in 0..PatternCode::space(len) {
            let code = PatternCode::new(value as u16);
            let pattern = code.decode(len);
            assert_eq!(pattern.len(), len);
            assert_eq!(pattern.encode(), code);
        }
    }
}

#[test]
fn matrix_codes_have_one_mark_per_position() {
    let matrix = embedded_matrix();
    let len = matrix.word_len();

    for guess in (0..matrix.len() as u32).step_by(37) {
        for &code in matrix.row(guess).unwrap() {
            assert!(code.is_valid_for(len));
            assert_eq!(code.decode(len).len(), len);
        }
    }
}

#[test]
fn parallel_build_is_deterministic() {
    let index = CandidateIndex::from_strs(WORDS).unwrap();
    let sequential = PatternMatrix::build_sequential(index.clone());
    let parallel = PatternMatrix::build(index, &SolverConfig::default());

    assert_eq!(parallel.strategy(), BuildStrategy::Parallel);
    assert!(sequential.same_codes(&parallel));
    assert_eq!(parallel.failed_cells(), 0);
    assert_eq!(parallel.memory_bytes(), WORDS.len() * WORDS.len() * 2);
}

#[test]
fn metric_bounds_hold_on_narrowed_targets() {
    let matrix = embedded_matrix();
    let engine = MetricEngine::new(&matrix, SolverConfig::default());

    let crane = matrix.index().id_of("crane").unwrap();
    let pattern = matrix.lookup_words("crane", "slate").unwrap();
    let targets = CompactWordSet::all(matrix.len()).filter_by_pattern(&matrix, crane, pattern);
    assert!(!targets.is_empty());
    let max_entropy = (targets.len() as f64).log2();

    for guess in 0..matrix.len() as u32 {
        let metrics = engine.exact_metrics(guess, &targets).unwrap();
        assert!(metrics.entropy >= 0.0);
        assert!(metrics.entropy <= max_entropy + 1e-9);
        assert!(metrics.expected_remaining >= 1.0 - 1e-12);
        assert!(metrics.column_length >= 1.0 - 1e-12);
    }
}

#[test]
fn filter_is_idempotent() {
    let set = CompactWordSet::from_ids([3, 10, 42]);
    assert_eq!(set.filter(|_| true), set);
    assert_eq!(set.filter(|id| id < 100).filter(|id| id < 100), set);
}

#[test]
fn selection_is_deterministic_across_variants() {
    let matrix = embedded_matrix();
    let engine = MetricEngine::new(&matrix, SolverConfig::default());
    let all = CompactWordSet::all(matrix.len());
    let targets = CompactWordSet::from_ids((0..matrix.len() as u32).step_by(5));

    for metric in [Metric::Entropy, Metric::Reduction, Metric::ColumnLength] {
        let seq = select_best_sequential(&engine, metric, &all, &targets).unwrap();
        let par = select_best_parallel(&engine, metric, &all, &targets).unwrap();
        assert_eq!(seq, par, "{metric}");
    }
}

#[test]
fn solver_plays_a_game_to_the_answer() {
    let matrix = embedded_matrix();
    let solver = Solver::new(&matrix, SolverConfig::default(), StrategyType::Entropy);
    let answer = word("toast");
    let mut history: Vec<(Word, Pattern)> = Vec::new();

    for _ in 0..10 {
        let guess = solver.next_guess(&history).unwrap().word.clone();
        let pattern = evaluate(&guess, &answer).unwrap();
        history.push((guess, pattern));
        if pattern.is_perfect() {
            break;
        }
    }

    let (last, pattern) = history.last().unwrap();
    assert!(pattern.is_perfect(), "stopped at {last} after {history:?}");
}
