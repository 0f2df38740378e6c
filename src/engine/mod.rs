//! Guess evaluation engine and turn state machine
//!
//! [`GuessEngine`] owns the board and turn state for one game at a time and
//! is the only thing allowed to mutate them.

mod board;
mod config;
mod error;
mod game;
mod state;

pub use board::{Attempt, Board, Cell};
pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS_LIMIT};
pub use error::GameError;
pub use game::{GuessEngine, GuessResult};
pub use state::{GameStatus, TurnState};
