//! Wordle Game
//!
//! A Wordle guess engine: five-letter guesses are checked against a
//! dictionary and scored with per-letter feedback until the secret is found
//! or the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::engine::{GameConfig, GameStatus, GuessEngine};
//! use wordle_game::core::Word;
//!
//! let dictionary = Dictionary::new(["crane", "trace", "slate"]).unwrap();
//! let secret = Word::new("crane").unwrap();
//! let mut engine = GuessEngine::new(&dictionary, GameConfig::default(), secret).unwrap();
//!
//! let result = engine.submit_guess("trace").unwrap();
//! assert_eq!(result.feedback.to_string(), "-GGYG");
//!
//! let result = engine.submit_guess("crane").unwrap();
//! assert_eq!(result.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Game rules and state
pub mod engine;

// Automated guessing
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
