//! Wordle - CLI
//!
//! Play Wordle in a TUI or a plain terminal, score single guesses, or run
//! seeded self-play simulations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{run_simple, run_simulation, score_words},
    dictionary::Dictionary,
    engine::GameConfig,
    interactive::{App, run_tui},
    output::{print_score_result, print_simulation_result},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle in the terminal: guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = wordle_game::engine::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Accept a word that was already guessed in the same game
    #[arg(long, global = true)]
    allow_repeats: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback a guess would receive against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Play many games with a random consistent guesser
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded()?,
        path => Dictionary::from_file(path)?,
    };
    tracing::info!(words = dictionary.len(), source = wordlist, "dictionary loaded");
    Ok(dictionary)
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = GameConfig::new(cli.max_attempts, !cli.allow_repeats);
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&dictionary, config, rng_from_seed(cli.seed))?;
            run_tui(app)
        }
        Commands::Simple => run_simple(&dictionary, config, &mut rng_from_seed(cli.seed)),
        Commands::Score { guess, secret } => {
            let result = score_words(&guess, &secret, &dictionary)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Simulate { games } => run_simulate_command(&dictionary, config, games, cli.seed),
    }
}

fn run_simulate_command(
    dictionary: &Dictionary,
    config: GameConfig,
    games: usize,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "🎯 Simulating {games} games over {} words (seed {seed})...",
        dictionary.len()
    );

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )?
        .progress_chars("█▓▒░"),
    );

    let result = run_simulation(dictionary, config, games, seed, &pb)?;
    print_simulation_result(&result);
    Ok(())
}
