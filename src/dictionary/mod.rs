//! Dictionary of valid words
//!
//! Supplies the valid-word universe for guess checking and the pool that
//! secrets are drawn from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a dictionary
///
/// Fatal: without a dictionary no game can start.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid 5-letter words")]
    Empty,
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Source of valid words and secrets
///
/// The engine only talks to its dictionary through this trait, so tests and
/// alternative word sources can stand in for [`Dictionary`].
pub trait DictionaryProvider {
    /// True iff `word` is in the dictionary (case-insensitive)
    fn is_valid_word(&self, word: &str) -> bool;

    /// Select a secret uniformly at random using the injected RNG
    fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Word;

    /// Number of occurrences of `letter` in `word` (case-insensitive)
    fn letter_frequency(&self, word: &str, letter: char) -> usize {
        let letter = letter.to_ascii_lowercase();
        word.chars()
            .filter(|ch| ch.to_ascii_lowercase() == letter)
            .count()
    }
}

/// Ordered, deduplicated word list with a hash index
///
/// Never empty: every constructor rejects an empty result.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lowercased. Anything that is not a valid
    /// 5-letter word is skipped, and duplicates keep their first position.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::{Dictionary, DictionaryProvider};
    ///
    /// let dictionary = Dictionary::new(["crane", "SLATE", "crane", "toolong"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_valid_word("Slate"));
    /// assert!(!dictionary.is_valid_word("toolong"));
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashMap::default();
        let mut skipped = 0usize;

        for entry in entries {
            let Ok(word) = Word::new(entry.as_ref().trim()) else {
                skipped += 1;
                continue;
            };
            if index.contains_key(word.text()) {
                skipped += 1;
                continue;
            }
            index.insert(word.text().to_string(), words.len());
            words.push(word);
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        tracing::debug!(words = words.len(), skipped, "dictionary loaded");
        Ok(Self { words, index })
    }

    /// Dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the build produced an empty list.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(WORDS.iter().copied())
    }

    /// Load a newline-delimited word list from disk
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no valid word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let entries = loader::read_entries(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(entries)
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Look up the stored word for `text` (case-insensitive)
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index
            .get(text.to_ascii_lowercase().as_str())
            .map(|&i| &self.words[i])
    }
}

impl DictionaryProvider for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.index.contains_key(word.to_ascii_lowercase().as_str())
    }

    fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())].clone()
    }
}
