//! Wordle pattern matrix - CLI
//!
//! Builds the guess × target pattern matrix for a vocabulary and queries guess
//! metrics against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use wordle_matrix::{
    commands::{
        BenchmarkConfig, analyze_word, evaluate_pair, parse_history_entry, run_benchmark,
        suggest_next,
    },
    config::{
        DEFAULT_FULL_CACHE_RATIO, DEFAULT_PARALLEL_BUILD_THRESHOLD,
        DEFAULT_PARALLEL_QUERY_THRESHOLD, SolverConfig,
    },
    core::{Pattern, Word},
    log::init_logger,
    matrix::PatternMatrix,
    output::{
        print_analysis_result, print_benchmark_result, print_pattern_result, print_suggest_result,
    },
    solver::{Solver, Strategy, StrategyType},
    vocabulary::CandidateIndex,
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_matrix",
    about = "Pattern matrix and information-theoretic guess metrics for word-guessing games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: entropy (default), reduction, column
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: StrategyType,

    /// Wordlist: 'builtin' (default, embedded list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Build the matrix in parallel above this many words
    #[arg(long, global = true, default_value_t = DEFAULT_PARALLEL_BUILD_THRESHOLD)]
    parallel_build_threshold: usize,

    /// Use whole-vocabulary metrics while |targets| / N is at least this ratio
    #[arg(long, global = true, default_value_t = DEFAULT_FULL_CACHE_RATIO)]
    cache_ratio: f64,

    /// Score candidates in parallel from this many candidates up
    #[arg(long, global = true, default_value_t = DEFAULT_PARALLEL_QUERY_THRESHOLD)]
    parallel_query_threshold: usize,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the feedback pattern of a guess against a target
    Pattern {
        guess: String,
        target: String,
    },

    /// Analyze every metric of a word against the whole vocabulary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Suggest next guesses after a history of guesses and patterns
    Suggest {
        /// Previous turn as guess=PATTERN, e.g. crane=RRGAX (repeatable)
        #[arg(long = "history", value_name = "GUESS=PATTERN")]
        history: Vec<String>,

        /// Number of suggestions to show
        #[arg(short = 'k', long, default_value = "10")]
        top: usize,
    },

    /// Benchmark matrix builds and selection queries
    Benchmark {
        /// Number of random target subsets to query
        #[arg(short = 'n', long, default_value = "20")]
        rounds: usize,

        /// Size of each random target subset
        #[arg(long, default_value = "100")]
        subset: usize,

        /// Seed for subset sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist: &str) -> Result<CandidateIndex> {
    let words = match wordlist {
        "builtin" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}"))?,
    };
    let index = CandidateIndex::new(words)?;
    info!(
        "Loaded {} words of length {} from {wordlist}",
        index.len(),
        index.word_len()
    );
    Ok(index)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = SolverConfig::new()
        .with_parallel_build_threshold(cli.parallel_build_threshold)
        .with_full_cache_ratio(cli.cache_ratio)
        .with_parallel_query_threshold(cli.parallel_query_threshold);

    match cli.command {
        Commands::Pattern { guess, target } => {
            let result = evaluate_pair(&guess, &target)?;
            print_pattern_result(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let index = load_vocabulary(&cli.wordlist)?;
            let matrix = PatternMatrix::build(index, &config);
            run_analyze_command(&Solver::new(&matrix, config, cli.strategy), &word)
        }
        Commands::Suggest { history, top } => {
            let history = history
                .iter()
                .map(|entry| parse_history_entry(entry))
                .collect::<Result<Vec<(Word, Pattern)>, _>>()?;
            let index = load_vocabulary(&cli.wordlist)?;
            let matrix = PatternMatrix::build(index, &config);
            run_suggest_command(&Solver::new(&matrix, config, cli.strategy), &history, top)
        }
        Commands::Benchmark {
            rounds,
            subset,
            seed,
        } => {
            let index = load_vocabulary(&cli.wordlist)?;
            let bench = BenchmarkConfig {
                rounds,
                subset,
                seed,
                show_progress: true,
            };
            let result = run_benchmark(&index, config, cli.strategy.metric(), bench)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_analyze_command<S: Strategy>(solver: &Solver<S>, word: &str) -> Result<()> {
    let result = analyze_word(solver, word, &solver.all_targets())?;
    print_analysis_result(&result);
    Ok(())
}

fn run_suggest_command(
    solver: &Solver<StrategyType>,
    history: &[(Word, Pattern)],
    top: usize,
) -> Result<()> {
    let result = suggest_next(solver, history, top)?;
    print_suggest_result(&result, solver.strategy().name());
    Ok(())
}
