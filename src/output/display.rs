//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, format_bytes, pattern_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, PatternResult, SuggestResult};
use crate::solver::EvaluationPath;
use colored::Colorize;

/// Print the pattern of one guess/target pair
pub fn print_pattern_result(result: &PatternResult) {
    println!(
        "\n{} → {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("   {}", colored_guess(result.guess.text(), &result.pattern));
    println!(
        "   {}  {}  code {}",
        pattern_to_emoji(&result.pattern),
        result.pattern,
        result.code.value()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_targets, 30);
    let path = match result.path {
        EvaluationPath::Cached => "whole-vocabulary cache",
        EvaluationPath::Exact => "exact",
    };

    println!("\n📊 Against {} possible targets ({path}):", result.total_targets);
    println!(
        "   Entropy:       [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Split factor:  {:.1}x", result.split_factor());
    println!("   Expected:      {:.2} targets remain", result.metrics.expected_remaining);
    println!("   Column length: {:.2}", result.metrics.column_length);
    println!(
        "   Patterns:      {} distinct, worst bucket {}",
        result.distinct_patterns, result.metrics.max_bucket
    );
}

/// Print ranked suggestions
pub fn print_suggest_result(result: &SuggestResult, strategy: &str) {
    const SHOWN: usize = 12;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} possible targets remain",
        result.remaining.len().to_string().bright_yellow().bold()
    );
    if !result.remaining.is_empty() {
        let shown: Vec<&str> = result
            .remaining
            .iter()
            .take(SHOWN)
            .map(String::as_str)
            .collect();
        let more = result.remaining.len().saturating_sub(SHOWN);
        if more > 0 {
            println!("   {} … (+{more})", shown.join(" "));
        } else {
            println!("   {}", shown.join(" "));
        }
    }
    println!("{}", "─".repeat(60).cyan());

    println!("\n💡 {} ({strategy}):", "Suggestions".bright_cyan().bold());
    for (rank, (word, score)) in result.suggestions.iter().enumerate() {
        let marker = if result.remaining.iter().any(|t| t == word) {
            "●".green()
        } else {
            " ".normal()
        };
        println!(
            "   {:2}. {} {}  {score:.4}",
            rank + 1,
            marker,
            word.to_uppercase().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🧮 {}", "Matrix build:".bright_cyan().bold());
    println!("   Words:            {}", result.total_words);
    println!("   Memory:           {}", format_bytes(result.memory_bytes));
    println!("   Sequential:       {:.2?}", result.sequential_build);
    println!(
        "   Parallel:         {:.2?} ({})",
        result.parallel_build,
        format!("{:.1}x", result.build_speedup()).bright_yellow()
    );
    println!("   Identical:        {}", agreement(result.builds_agree));

    println!("\n⚡ {}", "Selection queries:".bright_cyan().bold());
    println!("   Rounds:           {} × {} targets", result.rounds, result.subset);
    println!("   Sequential:       {:.2?}", result.sequential_queries);
    println!(
        "   Parallel:         {:.2?} ({})",
        result.parallel_queries,
        format!("{:.1}x", result.query_speedup()).bright_yellow()
    );
    println!("   Same picks:       {}", agreement(result.selections_agree));
}

fn agreement(agree: bool) -> colored::ColoredString {
    if agree {
        "yes".green().bold()
    } else {
        "NO".red().bold()
    }
}
