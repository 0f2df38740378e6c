//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the secret
//! - Absent (gray): no unclaimed occurrence left in the secret

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code used by the text format (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one submitted guess
///
/// Computed once from (guess, secret) and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is scored against `secret`
    ///
    /// # Algorithm
    /// 1. Seed a remaining-count pool with every letter of the secret
    /// 2. First pass: mark all exact matches Correct and remove them from the pool
    /// 3. Second pass: mark the rest Present while the pool still holds the
    ///    letter, Absent otherwise
    ///
    /// Exact matches must all be claimed before any presence is credited,
    /// otherwise an early yellow can steal the count a later green needs.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Absent, Mark::Correct, Mark::Correct, Mark::Present, Mark::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                marks[i] = Mark::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an occurrence is still unclaimed
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}
