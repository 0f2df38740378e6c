//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{ScoreResult, SimulationResult};
use colored::Colorize;

/// Print the feedback of a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.feedback));
    println!("  {}  {}", result.feedback.to_emoji(), result.feedback);

    for (word, known) in [
        (&result.guess, result.guess_in_dictionary),
        (&result.secret, result.secret_in_dictionary),
    ] {
        if !known {
            println!(
                "\n  {}",
                format!("note: {} is not in the word list", word.text().to_uppercase()).yellow()
            );
        }
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    if result.losses > 0 {
        println!(
            "   Lost:             {} {}",
            result.losses,
            format!("({:.1}%)", (1.0 - result.win_rate()) * 100.0).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_attempts {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / result.wins as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
