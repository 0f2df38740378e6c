//! Board of submitted rows

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// One committed row: the guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Word,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// A single tile as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub mark: Option<Mark>,
}

/// Fixed-capacity grid of rows
///
/// Rows are committed strictly in order, so the committed rows are always
/// a prefix of the grid and every row after them is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    attempts: Vec<Attempt>,
    rows: usize,
}

impl Board {
    pub(crate) fn new(rows: usize) -> Self {
        Self {
            attempts: Vec::with_capacity(rows),
            rows,
        }
    }

    /// Total rows, filled or not
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Committed rows in submission order
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Committed row at `index`, `None` if that row is still empty
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Attempt> {
        self.attempts.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.attempts.len() >= self.rows
    }

    /// Whether `word` was already submitted this game
    #[must_use]
    pub fn contains_guess(&self, word: &Word) -> bool {
        self.attempts.iter().any(|attempt| &attempt.guess == word)
    }

    /// Full grid of cells, empty rows included
    #[must_use]
    pub fn cells(&self) -> Vec<[Cell; WORD_LENGTH]> {
        (0..self.rows)
            .map(|index| {
                let mut row = [Cell::default(); WORD_LENGTH];
                if let Some(attempt) = self.attempts.get(index) {
                    for (i, cell) in row.iter_mut().enumerate() {
                        cell.letter = Some(char::from(attempt.guess.char_at(i)));
                        cell.mark = Some(attempt.feedback.marks()[i]);
                    }
                }
                row
            })
            .collect()
    }

    /// Best mark seen for each guessed letter
    ///
    /// Correct beats Present beats Absent, so a letter once found in place
    /// stays green even if a later guess puts it in the wrong slot.
    #[must_use]
    pub fn letter_marks(&self) -> FxHashMap<u8, Mark> {
        let mut marks: FxHashMap<u8, Mark> = FxHashMap::default();
        for attempt in &self.attempts {
            for (&letter, &mark) in attempt.guess.chars().iter().zip(attempt.feedback.marks()) {
                marks
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(mark))
                    .or_insert(mark);
            }
        }
        marks
    }

    pub(crate) fn push(&mut self, guess: Word, feedback: Feedback) {
        debug_assert!(!self.is_full(), "board has no free row");
        self.attempts.push(Attempt { guess, feedback });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(board: &mut Board, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new(secret).unwrap());
        board.push(guess, feedback);
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6);
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.rows(), 6);
        assert!(board.row(0).is_none());
    }

    #[test]
    fn cells_fill_committed_rows_only() {
        let mut board = Board::new(3);
        commit(&mut board, "trace", "crane");

        let cells = board.cells();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0][0].letter, Some('t'));
        assert_eq!(cells[0][0].mark, Some(Mark::Absent));
        assert_eq!(cells[0][3].mark, Some(Mark::Present));
        assert!(cells[1].iter().all(|cell| *cell == Cell::default()));
        assert!(cells[2].iter().all(|cell| *cell == Cell::default()));
    }

    #[test]
    fn letter_marks_keep_best_mark() {
        let mut board = Board::new(6);
        // 'r' correct in TRACE, then present in ROBOT
        commit(&mut board, "trace", "crane");
        commit(&mut board, "robot", "crane");

        let marks = board.letter_marks();
        assert_eq!(marks.get(&b'r'), Some(&Mark::Correct));
        assert_eq!(marks.get(&b't'), Some(&Mark::Absent));
        assert_eq!(marks.get(&b'c'), Some(&Mark::Present));
        assert_eq!(marks.get(&b'z'), None);
    }

    #[test]
    fn contains_guess_and_full() {
        let mut board = Board::new(2);
        commit(&mut board, "slate", "crane");
        assert!(board.contains_guess(&Word::new("slate").unwrap()));
        assert!(!board.contains_guess(&Word::new("crane").unwrap()));
        commit(&mut board, "crane", "crane");
        assert!(board.is_full());
        assert!(board.last().unwrap().feedback().is_perfect());
    }
}
