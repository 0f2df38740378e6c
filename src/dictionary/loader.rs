//! Word list loading utilities
//!
//! Reads newline-delimited word lists. Validation and deduplication happen
//! in [`Dictionary::new`](super::Dictionary::new).

use std::fs;
use std::io;
use std::path::Path;

/// Read the raw entries of a word list file
///
/// Blank lines and `#` comments are dropped; everything else is returned
/// trimmed, in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::loader::read_entries;
///
/// let entries = read_entries("data/words.txt").unwrap();
/// println!("Read {} entries", entries.len());
/// ```
pub fn read_entries<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Split word list text into trimmed entries
#[must_use]
pub fn parse_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entries_trims_lines() {
        let entries = parse_entries("crane\n  slate  \nirate\r\n");
        assert_eq!(entries, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_entries_skips_blank_and_comments() {
        let entries = parse_entries("# answers\n\ncrane\n   \n#slate\nirate");
        assert_eq!(entries, ["crane", "irate"]);
    }

    #[test]
    fn parse_entries_keeps_invalid_words_for_later_validation() {
        let entries = parse_entries("toolong\nabc");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn read_entries_missing_file() {
        assert!(read_entries("/definitely/not/here.txt").is_err());
    }
}
