//! Game status and turn bookkeeping

use std::fmt;

/// Overall game status
///
/// Transitions only forward: `InProgress` → `Won` | `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or Lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Attempts used versus the attempt budget
///
/// A plain value: the engine hands out copies, never a reference into
/// its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    attempts_used: usize,
    max_attempts: usize,
}

impl TurnState {
    pub(crate) const fn new(max_attempts: usize) -> Self {
        Self {
            attempts_used: 0,
            max_attempts,
        }
    }

    /// Valid guesses committed so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        self.max_attempts
    }

    /// Attempts left before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining(self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Row the next guess lands in, or `None` once the board is full
    #[must_use]
    pub const fn active_row(self) -> Option<usize> {
        if self.attempts_used < self.max_attempts {
            Some(self.attempts_used)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.attempts_used >= self.max_attempts
    }

    pub(crate) fn advance(&mut self) {
        debug_assert!(self.attempts_used < self.max_attempts);
        self.attempts_used += 1;
    }
}
