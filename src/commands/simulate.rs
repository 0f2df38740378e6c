//! Self-play simulation
//!
//! Plays many games through the real engine with a consistent-random
//! guesser and aggregates the outcomes.

use crate::dictionary::Dictionary;
use crate::engine::{GameConfig, GameError, GameStatus, GuessEngine};
use crate::solver::ConsistentGuesser;
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Outcome of a single simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub guesses: usize,
    pub won: bool,
}

/// Aggregate result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub max_attempts: usize,
    pub average_guesses: f64,
    /// Wins keyed by the attempt they were won on
    pub distribution: FxHashMap<usize, usize>,
    pub seed: u64,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Play one game to completion
///
/// # Errors
///
/// Returns an error only if the configuration is unplayable.
pub fn play_game(
    dictionary: &Dictionary,
    config: GameConfig,
    rng: &mut StdRng,
) -> Result<GameRecord, GameError> {
    let mut engine = GuessEngine::with_random_secret(dictionary, config, rng)?;
    let mut guesser = ConsistentGuesser::new(dictionary.words());

    while !engine.status().is_over() {
        let Some(guess) = guesser.next_guess(rng) else {
            break;
        };
        match engine.submit_guess(guess.text()) {
            Ok(result) => guesser.observe(guess, result.feedback),
            Err(err) => {
                tracing::warn!(%guess, %err, "simulated guess rejected");
                break;
            }
        }
    }

    Ok(GameRecord {
        secret: engine
            .revealed_secret()
            .map(ToString::to_string)
            .unwrap_or_default(),
        guesses: engine.turn().attempts_used(),
        won: engine.status() == GameStatus::Won,
    })
}

/// Run `games` independent games in parallel
///
/// Game `i` is seeded with `seed + i`, so a run is reproducible regardless
/// of how rayon schedules it.
///
/// # Errors
///
/// Returns an error if the configuration is unplayable.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: GameConfig,
    games: usize,
    seed: u64,
    progress: &ProgressBar,
) -> Result<SimulationResult, GameError> {
    config.validate()?;
    let start = Instant::now();

    let records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let record = play_game(dictionary, config, &mut rng);
            progress.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;

    progress.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut winning_guesses = 0;
    for record in records.iter().filter(|r| r.won) {
        *distribution.entry(record.guesses).or_insert(0) += 1;
        winning_guesses += record.guesses;
    }

    let wins = records.iter().filter(|r| r.won).count();
    let average_guesses = if wins > 0 {
        winning_guesses as f64 / wins as f64
    } else {
        0.0
    };

    tracing::debug!(games, wins, ?duration, "simulation finished");

    Ok(SimulationResult {
        games,
        wins,
        losses: games - wins,
        max_attempts: config.max_attempts,
        average_guesses,
        distribution,
        seed,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new([
            "crane", "trace", "slate", "irate", "crate", "grate", "speed", "erase", "those",
            "geese", "robot", "floor",
        ])
        .unwrap()
    }

    #[test]
    fn play_game_terminates_within_budget() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(11);
        let record = play_game(&dict, GameConfig::default(), &mut rng).unwrap();

        assert!(record.guesses >= 1);
        assert!(record.guesses <= 6);
        assert!(dict.get(&record.secret).is_some());
    }

    #[test]
    fn single_word_dictionary_always_wins_first_try() {
        let dict = Dictionary::new(["crane"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let record = play_game(&dict, GameConfig::default(), &mut rng).unwrap();

        assert_eq!(
            record,
            GameRecord {
                secret: "crane".to_string(),
                guesses: 1,
                won: true,
            }
        );
    }

    #[test]
    fn simulation_distribution_sums_to_wins() {
        let dict = dictionary();
        let result =
            run_simulation(&dict, GameConfig::default(), 40, 5, &ProgressBar::hidden()).unwrap();

        assert_eq!(result.games, 40);
        assert_eq!(result.wins + result.losses, 40);
        assert_eq!(result.distribution.values().sum::<usize>(), result.wins);
        for &guesses in result.distribution.keys() {
            assert!((1..=6).contains(&guesses));
        }
    }

    #[test]
    fn simulation_is_reproducible() {
        let dict = dictionary();
        let config = GameConfig::default();
        let a = run_simulation(&dict, config, 25, 99, &ProgressBar::hidden()).unwrap();
        let b = run_simulation(&dict, config, 25, 99, &ProgressBar::hidden()).unwrap();

        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn simulation_rejects_bad_config() {
        let dict = dictionary();
        let result = run_simulation(&dict, GameConfig::new(0, true), 5, 0, &ProgressBar::hidden());
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn empty_simulation() {
        let dict = dictionary();
        let result =
            run_simulation(&dict, GameConfig::default(), 0, 0, &ProgressBar::hidden()).unwrap();
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
