//! Engine error types.
//!
//! Every guess-time error is recoverable and leaves the game untouched:
//! - `IncompleteGuess`: fewer than 5 letters entered
//! - `InvalidWord`: not in the dictionary
//! - `DuplicateGuess`: already guessed this game (when repeats are rejected)
//! - `GameAlreadyOver`: stray input after Won/Lost
//!
//! `SecretNotInDictionary` and `InvalidConfig` are caller mistakes raised
//! when a game is (re)started.

use super::GameStatus;
use thiserror::Error;

/// Errors returned by [`GuessEngine`](super::GuessEngine)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Fewer than 5 letters filled
    #[error("not enough letters: {filled} of 5")]
    IncompleteGuess {
        /// Letters actually present in the submitted row
        filled: usize,
    },

    /// Guess is not a dictionary word
    #[error("not in word list: {0}")]
    InvalidWord(String),

    /// Guess was already submitted this game
    #[error("already guessed: {0}")]
    DuplicateGuess(String),

    /// Game reached a terminal state
    #[error("game is already over ({0})")]
    GameAlreadyOver(GameStatus),

    /// Secret handed to start/restart is not a dictionary word
    #[error("secret is not in the dictionary: {0}")]
    SecretNotInDictionary(String),

    /// Configuration cannot produce a playable game
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// True for errors the player can recover from by editing their input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::IncompleteGuess { .. }
                | Self::InvalidWord(_)
                | Self::DuplicateGuess(_)
                | Self::GameAlreadyOver(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_time_errors_are_recoverable() {
        for err in [
            GameError::IncompleteGuess { filled: 3 },
            GameError::InvalidWord("zzzzz".to_string()),
            GameError::DuplicateGuess("crane".to_string()),
            GameError::GameAlreadyOver(GameStatus::Won),
        ] {
            assert!(err.is_recoverable(), "{err}");
        }
    }

    #[test]
    fn setup_errors_are_not_recoverable() {
        assert!(!GameError::SecretNotInDictionary("qwert".to_string()).is_recoverable());
        assert!(!GameError::InvalidConfig("max_attempts must be at least 1".to_string()).is_recoverable());
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            GameError::IncompleteGuess { filled: 2 }.to_string(),
            "not enough letters: 2 of 5"
        );
        assert_eq!(
            GameError::InvalidWord("zzzzz".to_string()).to_string(),
            "not in word list: zzzzz"
        );
    }
}
