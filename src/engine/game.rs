//! The guess engine state machine

use super::{Board, GameConfig, GameError, GameStatus, TurnState};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::dictionary::{Dictionary, DictionaryProvider};
use rand::Rng;

/// Outcome of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    pub feedback: Feedback,
    pub attempts_used: usize,
    pub status: GameStatus,
}

/// Validates guesses, scores them and advances the game
///
/// Borrows its dictionary, so any number of engines can share one loaded
/// word list. All mutation goes through [`submit_guess`](Self::submit_guess)
/// and [`restart`](Self::restart); everything else is a read-only snapshot.
#[derive(Debug, Clone)]
pub struct GuessEngine<'a, D: DictionaryProvider = Dictionary> {
    dictionary: &'a D,
    config: GameConfig,
    secret: Word,
    board: Board,
    turn: TurnState,
    status: GameStatus,
}

impl<'a, D: DictionaryProvider> GuessEngine<'a, D> {
    /// Start a game against a known secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` for an unplayable configuration and
    /// `GameError::SecretNotInDictionary` if the secret could never be
    /// guessed.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::dictionary::Dictionary;
    /// use wordle_game::engine::{GameConfig, GameStatus, GuessEngine};
    ///
    /// let dictionary = Dictionary::new(["crane", "trace", "slate"]).unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let mut engine = GuessEngine::new(&dictionary, GameConfig::default(), secret).unwrap();
    ///
    /// let result = engine.submit_guess("trace").unwrap();
    /// assert_eq!(result.feedback.to_string(), "-GGYG");
    /// assert_eq!(result.status, GameStatus::InProgress);
    ///
    /// let result = engine.submit_guess("CRANE").unwrap();
    /// assert_eq!(result.status, GameStatus::Won);
    /// ```
    pub fn new(dictionary: &'a D, config: GameConfig, secret: Word) -> Result<Self, GameError> {
        config.validate()?;
        check_secret(dictionary, &secret)?;

        Ok(Self {
            dictionary,
            config,
            secret,
            board: Board::new(config.max_attempts),
            turn: TurnState::new(config.max_attempts),
            status: GameStatus::InProgress,
        })
    }

    /// Start a game against a secret drawn from the dictionary
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` for an unplayable configuration.
    pub fn with_random_secret<R: Rng + ?Sized>(
        dictionary: &'a D,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = dictionary.pick_secret(rng);
        Self::new(dictionary, config, secret)
    }

    /// Reset the board and turn state and play against `secret`
    ///
    /// Allowed in any status, terminal ones included.
    ///
    /// # Errors
    /// Returns `GameError::SecretNotInDictionary` and leaves the current game
    /// untouched if `secret` is not a dictionary word.
    pub fn start_game(&mut self, secret: Word) -> Result<(), GameError> {
        check_secret(self.dictionary, &secret)?;

        self.secret = secret;
        self.board = Board::new(self.config.max_attempts);
        self.turn = TurnState::new(self.config.max_attempts);
        self.status = GameStatus::InProgress;

        tracing::debug!(max_attempts = self.config.max_attempts, "game started");
        Ok(())
    }

    /// Discard the current game and start over with `new_secret`
    ///
    /// # Errors
    /// Same as [`start_game`](Self::start_game).
    pub fn restart(&mut self, new_secret: Word) -> Result<(), GameError> {
        self.start_game(new_secret)
    }

    /// Restart with a secret drawn from the dictionary
    ///
    /// # Errors
    /// Only if the provider hands back a word it does not itself accept.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let secret = self.dictionary.pick_secret(rng);
        self.start_game(secret)
    }

    /// Submit a completed row
    ///
    /// Checks run in order: game still in progress, all 5 letters filled,
    /// dictionary membership, then (if configured) repeats. A rejected guess
    /// changes nothing and consumes no attempt.
    ///
    /// # Errors
    /// `GameAlreadyOver`, `IncompleteGuess`, `InvalidWord` or
    /// `DuplicateGuess`, as described in [`GameError`].
    pub fn submit_guess(&mut self, letters: &str) -> Result<GuessResult, GameError> {
        if self.status.is_over() {
            tracing::trace!(status = %self.status, "guess after game over");
            return Err(GameError::GameAlreadyOver(self.status));
        }

        let filled = letters.chars().filter(|ch| ch.is_alphabetic()).count();
        if filled < WORD_LENGTH {
            tracing::trace!(filled, "incomplete guess");
            return Err(GameError::IncompleteGuess { filled });
        }

        let text = letters.trim().to_lowercase();
        if !self.dictionary.is_valid_word(&text) {
            tracing::trace!(guess = %text, "guess not in word list");
            return Err(GameError::InvalidWord(text));
        }
        let guess = Word::new(text.as_str()).map_err(|_| GameError::InvalidWord(text))?;

        if self.config.reject_repeats && self.board.contains_guess(&guess) {
            tracing::trace!(%guess, "repeated guess");
            return Err(GameError::DuplicateGuess(guess.text().to_string()));
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        self.board.push(guess, feedback);
        self.turn.advance();

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.turn.is_exhausted() {
            self.status = GameStatus::Lost;
        }

        tracing::debug!(
            attempt = self.turn.attempts_used(),
            %feedback,
            status = %self.status,
            "guess accepted"
        );

        Ok(GuessResult {
            feedback,
            attempts_used: self.turn.attempts_used(),
            status: self.status,
        })
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn turn(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The secret, but only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }
}

fn check_secret<D: DictionaryProvider>(dictionary: &D, secret: &Word) -> Result<(), GameError> {
    if dictionary.is_valid_word(secret.text()) {
        Ok(())
    } else {
        Err(GameError::SecretNotInDictionary(secret.text().to_string()))
    }
}
