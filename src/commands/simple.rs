//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::dictionary::Dictionary;
use crate::engine::{GameConfig, GameStatus, GuessEngine};
use crate::output::formatters::colored_row;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// configuration is unplayable.
pub fn run_simple<R: Rng>(dictionary: &Dictionary, config: GameConfig, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the 5-letter word in {} tries.",
        config.max_attempts
    );
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  - {} not in the word", " - ".white().on_bright_black());
    println!("\nCommands: 'quit' to exit, 'new' for a new game\n");

    let mut engine = GuessEngine::with_random_secret(dictionary, config, rng)?;

    loop {
        let turn = engine.turn();
        let prompt = format!(
            "Guess {}/{}",
            turn.attempts_used() + 1,
            turn.max_attempts()
        );

        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                engine.new_game(rng)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match engine.submit_guess(&input) {
            Ok(result) => {
                if let Some(attempt) = engine.board().last() {
                    println!("  {}", colored_row(attempt.guess(), attempt.feedback()));
                }

                match result.status {
                    GameStatus::InProgress => {}
                    GameStatus::Won => {
                        println!(
                            "\n{}",
                            format!(
                                "🎉 Solved in {} {}!",
                                result.attempts_used,
                                if result.attempts_used == 1 { "guess" } else { "guesses" }
                            )
                            .green()
                            .bold()
                        );
                        print_history(&engine);
                        if !play_again(&mut engine, rng)? {
                            return Ok(());
                        }
                    }
                    GameStatus::Lost => {
                        let secret = engine
                            .revealed_secret()
                            .map(|w| w.text().to_uppercase())
                            .unwrap_or_default();
                        println!(
                            "\n{}",
                            format!("❌ Out of guesses! The word was {secret}").red().bold()
                        );
                        print_history(&engine);
                        if !play_again(&mut engine, rng)? {
                            return Ok(());
                        }
                    }
                }
            }
            Err(err) if err.is_recoverable() => {
                println!("  {}", err.to_string().yellow());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn print_history(engine: &GuessEngine<'_>) {
    println!();
    for attempt in engine.board().attempts() {
        println!("  {}", attempt.feedback().to_emoji());
    }
    println!();
}

fn play_again<R: Rng>(engine: &mut GuessEngine<'_>, rng: &mut R) -> Result<bool> {
    match get_user_input("Play again? (yes/no)")?
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            engine.new_game(rng)?;
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
