//! Engine configuration

use super::GameError;

/// Standard attempt budget
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest attempt budget a board can be built with
pub const MAX_ATTEMPTS_LIMIT: usize = 26;

/// Rules a game is played under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board rows, i.e. valid guesses before the game is lost
    pub max_attempts: usize,
    /// Reject a word already guessed this game instead of scoring it again
    pub reject_repeats: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: usize, reject_repeats: bool) -> Self {
        Self {
            max_attempts,
            reject_repeats,
        }
    }

    /// Check the configuration can produce a playable game
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if `max_attempts` is zero or above
    /// [`MAX_ATTEMPTS_LIMIT`].
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(GameError::InvalidConfig(format!(
                "max_attempts must be at most {MAX_ATTEMPTS_LIMIT}, got {}",
                self.max_attempts
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, true)
    }
}
