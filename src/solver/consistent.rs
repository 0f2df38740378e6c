//! Consistent-random guesser
//!
//! Keeps every dictionary word that would have produced the feedback seen so
//! far and guesses one of them uniformly at random.

use crate::core::{Feedback, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Guesser that only ever plays words still consistent with the history
pub struct ConsistentGuesser<'a> {
    candidates: Vec<&'a Word>,
}

impl<'a> ConsistentGuesser<'a> {
    /// Start with every word in `words` as a candidate
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            candidates: words.iter().collect(),
        }
    }

    /// Pick the next guess, or `None` if no candidate remains
    pub fn next_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a Word> {
        self.candidates.choose(rng).copied()
    }

    /// Drop candidates that would not have produced `feedback` for `guess`
    pub fn observe(&mut self, guess: &Word, feedback: Feedback) {
        self.candidates
            .retain(|&candidate| Feedback::calculate(guess, candidate) == feedback);
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }
}
