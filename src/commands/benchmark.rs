//! Benchmark command
//!
//! Times the sequential and parallel matrix builds and random-subset
//! selection queries over one vocabulary.

use crate::config::SolverConfig;
use crate::matrix::PatternMatrix;
use crate::solver::{Metric, MetricEngine, select_best_parallel, select_best_sequential};
use crate::vocabulary::{CandidateIndex, CompactWordSet, WordId};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Parameters of a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of random target subsets to query
    pub rounds: usize,
    /// Size of each subset (clamped to the vocabulary size)
    pub subset: usize,
    /// Seed for subset sampling; a fresh seed is drawn when `None`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            rounds: 20,
            subset: 100,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub sequential_build: Duration,
    pub parallel_build: Duration,
    /// Whether both builds produced identical matrices
    pub builds_agree: bool,
    pub memory_bytes: usize,
    pub rounds: usize,
    pub subset: usize,
    pub sequential_queries: Duration,
    pub parallel_queries: Duration,
    /// Whether every query picked the same guess on both paths
    pub selections_agree: bool,
}

impl BenchmarkResult {
    #[must_use]
    pub fn build_speedup(&self) -> f64 {
        self.sequential_build.as_secs_f64() / self.parallel_build.as_secs_f64().max(f64::EPSILON)
    }

    #[must_use]
    pub fn query_speedup(&self) -> f64 {
        self.sequential_queries.as_secs_f64()
            / self.parallel_queries.as_secs_f64().max(f64::EPSILON)
    }
}

/// Run the benchmark over `index`
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a query fails.
pub fn run_benchmark(
    index: &CandidateIndex,
    config: SolverConfig,
    metric: Metric,
    bench: BenchmarkConfig,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let sequential = PatternMatrix::build_sequential(index.clone());
    let sequential_build = start.elapsed();

    let start = Instant::now();
    let parallel = PatternMatrix::build_parallel(index.clone());
    let parallel_build = start.elapsed();

    let builds_agree = sequential.same_codes(&parallel);
    let engine = MetricEngine::new(&parallel, config);
    let candidates = CompactWordSet::all(parallel.len());
    let subset = bench.subset.clamp(1, parallel.len());

    let mut rng = StdRng::seed_from_u64(bench.seed.unwrap_or_else(|| rand::rng().random()));
    let subsets: Vec<CompactWordSet> = (0..bench.rounds)
        .map(|_| {
            sample(&mut rng, parallel.len(), subset)
                .into_iter()
                .map(|i| i as WordId)
                .collect()
        })
        .collect();

    let pb = if bench.show_progress {
        ProgressBar::new(2 * bench.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    pb.set_message("sequential");
    let start = Instant::now();
    let mut sequential_picks = Vec::with_capacity(subsets.len());
    for targets in &subsets {
        sequential_picks.push(select_best_sequential(&engine, metric, &candidates, targets)?.id);
        pb.inc(1);
    }
    let sequential_queries = start.elapsed();

    pb.set_message("parallel");
    let start = Instant::now();
    let mut parallel_picks = Vec::with_capacity(subsets.len());
    for targets in &subsets {
        parallel_picks.push(select_best_parallel(&engine, metric, &candidates, targets)?.id);
        pb.inc(1);
    }
    let parallel_queries = start.elapsed();
    pb.finish_and_clear();

    Ok(BenchmarkResult {
        total_words: parallel.len(),
        sequential_build,
        parallel_build,
        builds_agree,
        memory_bytes: parallel.memory_bytes(),
        rounds: bench.rounds,
        subset,
        sequential_queries,
        parallel_queries,
        selections_agree: sequential_picks == parallel_picks,
    })
}
