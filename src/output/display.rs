//! Display functions for command results

use super::formatters::distribution_bar;
use crate::commands::{AnalysisResult, BenchmarkReport};
use crate::core::Word;
use crate::session::SessionOutcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(target: &str, outcome: &SessionOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", target.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, record) in outcome.records.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            record.guess.text().to_uppercase(),
            record.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                record.candidates_before, record.candidates_after
            );
        }
    }

    println!();
    if outcome.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.guess_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", outcome.guess_count())
                .red()
                .bold()
        );
        let remaining: Vec<&str> = outcome.remaining.iter().map(Word::text).collect();
        println!("   Still possible: {}", remaining.join(", "));
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!("\n{}", "(not in the dictionary, so not a hard-mode guess)".yellow());
    }

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} remaining", result.worst_case).bright_yellow()
    );
    println!("   Patterns:    {} distinct", result.pattern_count);

    println!("\n📈 {}", "Largest partitions:".bright_cyan().bold());
    for (pattern, size) in &result.largest {
        let bar = distribution_bar(*size, result.worst_case, 30);
        println!("   {} {} {size:5}", pattern.to_emoji(), bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", report.total_words);

    if report.solved == 0 {
        println!("   {}", "No puzzles were solved successfully.".red());
    } else {
        println!(
            "   Solved:           {} {}",
            report.solved,
            format!(
                "({:.1}%)",
                report.solved as f64 / report.total_words as f64 * 100.0
            )
            .green()
        );
        println!(
            "   Average guesses:  {}",
            format!("{:.2}", report.average_guesses)
                .bright_yellow()
                .bold()
        );
        println!(
            "   Best case:        {}",
            format!("{}", report.min_guesses).green()
        );
        println!(
            "   Worst case:       {}",
            format!("{}", report.max_guesses).yellow()
        );
    }
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", report.words_per_second());

    if report.solved > 0 {
        println!("\n📈 {}", "Guess Distribution:".bright_cyan().bold());
        let max_count = report.distribution.values().copied().max().unwrap_or(0);
        for guess_count in 1..=report.max_allowed {
            let count = report.distribution.get(&guess_count).copied().unwrap_or(0);
            let bar = distribution_bar(count, max_count, 40);
            println!(
                "   {guess_count}: {} {count:5} ({:5.1}%)",
                bar.green(),
                report.percentage(guess_count)
            );
        }
    }

    if report.failed() > 0 {
        println!(
            "\n{}",
            format!(
                "❌ Failed to solve {} puzzles out of {} (cap {})",
                report.failed(),
                report.total_words,
                report.max_allowed
            )
            .red()
            .bold()
        );
        let shown: Vec<&str> = report.failures.iter().take(10).map(Word::text).collect();
        println!("   {}", shown.join(", "));
    }
}
