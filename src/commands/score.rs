//! Score a single guess against a secret
//!
//! A debugging aid for checking feedback by hand.

use crate::core::{Feedback, Word, WordError};
use crate::dictionary::{Dictionary, DictionaryProvider};

/// Feedback for one guess, plus whether both words are playable
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
    pub guess_in_dictionary: bool,
    pub secret_in_dictionary: bool,
}

/// Score `guess` against `secret`
///
/// Dictionary membership is reported, not enforced, so arbitrary pairs can
/// be checked.
///
/// # Errors
///
/// Returns an error if either input is not a 5-letter word.
pub fn score_words(
    guess: &str,
    secret: &str,
    dictionary: &Dictionary,
) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let feedback = Feedback::calculate(&guess, &secret);

    Ok(ScoreResult {
        guess_in_dictionary: dictionary.is_valid_word(guess.text()),
        secret_in_dictionary: dictionary.is_valid_word(secret.text()),
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_words_reports_feedback() {
        let dict = Dictionary::new(["crane", "trace"]).unwrap();
        let result = score_words("TRACE", "crane", &dict).unwrap();

        assert_eq!(result.feedback.to_string(), "-GGYG");
        assert!(result.guess_in_dictionary);
        assert!(result.secret_in_dictionary);
    }

    #[test]
    fn score_words_outside_dictionary() {
        let dict = Dictionary::new(["crane"]).unwrap();
        let result = score_words("zzzzz", "crane", &dict).unwrap();

        assert!(!result.guess_in_dictionary);
        assert_eq!(result.feedback.to_string(), "-----");
    }

    #[test]
    fn score_words_rejects_bad_input() {
        let dict = Dictionary::new(["crane"]).unwrap();
        assert_eq!(
            score_words("cran", "crane", &dict).err(),
            Some(WordError::InvalidLength(4))
        );
    }
}
