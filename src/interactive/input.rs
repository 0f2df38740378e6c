//! Keystroke assembly for the active row
//!
//! Letters are collected here until the player submits; the engine only
//! ever sees complete rows.

use crate::core::WORD_LENGTH;

/// Letters typed into the active row so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowInput {
    letters: Vec<char>,
}

impl RowInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter; ignored if the row is full or `ch` is not a letter
    pub fn push(&mut self, ch: char) -> bool {
        if self.letters.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Row contents as cells, empty slots as `None`
    #[must_use]
    pub fn cells(&self) -> [Option<char>; WORD_LENGTH] {
        let mut cells = [None; WORD_LENGTH];
        for (cell, &ch) in cells.iter_mut().zip(&self.letters) {
            *cell = Some(ch);
        }
        cells
    }

    #[must_use]
    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_accepts_letters_up_to_row_length() {
        let mut input = RowInput::new();
        for ch in "CRANES".chars() {
            input.push(ch);
        }
        assert_eq!(input.as_string(), "crane");
        assert_eq!(input.len(), WORD_LENGTH);
    }

    #[test]
    fn push_rejects_non_letters() {
        let mut input = RowInput::new();
        assert!(!input.push('3'));
        assert!(!input.push(' '));
        assert!(input.push('a'));
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn pop_and_cells() {
        let mut input = RowInput::new();
        input.push('c');
        input.push('r');
        assert_eq!(input.pop(), Some('r'));
        assert_eq!(input.cells(), [Some('c'), None, None, None, None]);

        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.pop(), None);
    }
}
