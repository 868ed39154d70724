//! Display functions for command results

use super::formatters::{create_progress_bar, guess_row, guesses_label};
use crate::commands::{AddResult, AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::Outcome;
use colored::Colorize;

/// Score drawn as a full bar
const SCORE_SCALE: f64 = 0.5;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.as_str().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {turn}: {} {}",
            guess_row(&step.word, &step.evaluation),
            step.evaluation.to_emoji()
        );

        if verbose {
            match step.candidates_after {
                Some(after) => {
                    println!("  Candidates: {} → {after}", step.candidates_before);
                    if after > 0 {
                        let reduction = step.candidates_before as f64 / after as f64;
                        println!("  Reduction:  {reduction:.1}x");
                    }
                }
                None => println!(
                    "  Candidates: {} → {}",
                    step.candidates_before,
                    "none".red()
                ),
            }
        }
    }

    println!();
    match &result.outcome {
        Outcome::Solved { guesses } => println!(
            "{}",
            format!("✅ Solved in {}!", guesses_label(*guesses))
                .green()
                .bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!("❌ Failed to solve in {}", guesses_label(result.guesses.len()))
                .red()
                .bold()
        ),
        Outcome::NoSolution(error) => {
            println!("{}", format!("⚠️  Solver gave up: {error}").yellow().bold());
        }
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.as_str().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(result.score, SCORE_SCALE, 30);
    let yes_no = |flag: bool| if flag { "yes".green() } else { "no".red() };

    println!("\n📊 Letter frequency:");
    println!(
        "   Score:       [{}] {}",
        bar.green(),
        format!("{:.4}", result.score).bright_yellow()
    );
    println!(
        "   Rank:        {} of {}",
        result.rank, result.lexicon_size
    );
    println!("   Letters:     {}", result.letters);
    println!("   Distinct:    {}", yes_no(result.distinct_letters));
    println!("   In list:     {}", yes_no(result.in_lexicon));
    println!(
        "   Opener:      {} (threshold {:.3})",
        yes_no(result.qualifies_as_opener),
        result.threshold
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved.to_string().green(),
        result.success_rate()
    );
    println!("   Lost:             {}", result.lost.to_string().red());
    println!(
        "   No solution:      {}",
        result.no_solution.to_string().yellow()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
    let failed = result.lost + result.no_solution;
    if failed > 0 {
        let pct = (failed as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   ✗: {} {failed:4} ({pct:5.1}%)", bar.red());
    }
}

/// Print a word accepted by the `add` command
pub fn print_add_result(result: &AddResult) {
    println!(
        "{} {} (score {:.4}) to {}; {} words",
        "Added".green().bold(),
        result.word.as_str().bright_yellow().bold(),
        result.score,
        result.source,
        result.lexicon_size
    );
}
