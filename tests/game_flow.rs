//! End-to-end games through the public engine API

use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::{
    commands::{play_game, run_simulation, score_words},
    core::{Feedback, Mark, Word},
    dictionary::{Dictionary, DictionaryProvider},
    engine::{GameConfig, GameError, GameStatus, GuessEngine},
};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn trace_against_crane() {
    let feedback = Feedback::calculate(&word("trace"), &word("crane"));
    assert_eq!(
        feedback.marks(),
        &[Mark::Absent, Mark::Correct, Mark::Correct, Mark::Present, Mark::Correct]
    );
}

#[test]
fn duplicate_letters_are_not_double_counted() {
    // speed has two e's; erase spends them at positions 0 and 4
    assert_eq!(
        Feedback::calculate(&word("erase"), &word("speed")).to_string(),
        "Y--YY"
    );
    // three e's guessed, two exist: the third stays grey
    assert_eq!(
        Feedback::calculate(&word("eerie"), &word("speed")).to_string(),
        "YY---"
    );
    // exact matches claim their letter before any yellow does
    assert_eq!(
        Feedback::calculate(&word("geese"), &word("those")).to_string(),
        "---GG"
    );
}

#[test]
fn full_game_won_on_third_guess() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut engine =
        GuessEngine::new(&dictionary, GameConfig::default(), word("crane")).unwrap();

    let first = engine.submit_guess("slate").unwrap();
    assert_eq!(first.status, GameStatus::InProgress);
    assert_eq!(first.attempts_used, 1);

    let second = engine.submit_guess("TRACE").unwrap();
    assert_eq!(second.feedback.to_string(), "-GGYG");
    assert_eq!(engine.revealed_secret(), None);

    let third = engine.submit_guess("crane").unwrap();
    assert_eq!(third.status, GameStatus::Won);
    assert_eq!(third.attempts_used, 3);
    assert_eq!(engine.board().attempts().len(), 3);
    assert_eq!(engine.revealed_secret(), Some(&word("crane")));
}

#[test]
fn restart_after_loss_resets_everything() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut engine =
        GuessEngine::new(&dictionary, GameConfig::new(2, true), word("crane")).unwrap();

    engine.submit_guess("slate").unwrap();
    let last = engine.submit_guess("trace").unwrap();
    assert_eq!(last.status, GameStatus::Lost);
    assert_eq!(
        engine.submit_guess("crane"),
        Err(GameError::GameAlreadyOver(GameStatus::Lost))
    );

    engine.restart(word("speed")).unwrap();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.turn().attempts_used(), 0);
    assert!(engine.board().is_empty());
    assert!(engine.board().cells().iter().flatten().all(|cell| cell.letter.is_none()));

    // Guesses from the previous game are no longer repeats
    let result = engine.submit_guess("slate").unwrap();
    assert_eq!(result.attempts_used, 1);
}

#[test]
fn rejections_do_not_consume_attempts() {
    let dictionary = Dictionary::embedded().unwrap();
    let mut engine =
        GuessEngine::new(&dictionary, GameConfig::default(), word("crane")).unwrap();

    assert!(matches!(
        engine.submit_guess("cra"),
        Err(GameError::IncompleteGuess { filled: 3 })
    ));
    assert!(matches!(
        engine.submit_guess("zzzzz"),
        Err(GameError::InvalidWord(_))
    ));
    engine.submit_guess("slate").unwrap();
    assert!(matches!(
        engine.submit_guess("slate"),
        Err(GameError::DuplicateGuess(_))
    ));

    assert_eq!(engine.turn().attempts_used(), 1);
    assert_eq!(engine.turn().remaining(), 5);
}

#[test]
fn seeded_secrets_are_reproducible() {
    let dictionary = Dictionary::embedded().unwrap();
    let pick = |seed| dictionary.pick_secret(&mut StdRng::seed_from_u64(seed));
    assert_eq!(pick(7), pick(7));

    let mut a = GuessEngine::with_random_secret(
        &dictionary,
        GameConfig::new(1, true),
        &mut StdRng::seed_from_u64(99),
    )
    .unwrap();
    let mut b = GuessEngine::with_random_secret(
        &dictionary,
        GameConfig::new(1, true),
        &mut StdRng::seed_from_u64(99),
    )
    .unwrap();
    a.submit_guess("slate").unwrap();
    b.submit_guess("slate").unwrap();
    assert_eq!(a.revealed_secret(), b.revealed_secret());

    let record_a = play_game(&dictionary, GameConfig::default(), &mut StdRng::seed_from_u64(3));
    let record_b = play_game(&dictionary, GameConfig::default(), &mut StdRng::seed_from_u64(3));
    assert_eq!(record_a.unwrap(), record_b.unwrap());
}

#[test]
fn simulation_over_embedded_words() {
    let dictionary = Dictionary::embedded().unwrap();
    let result = run_simulation(
        &dictionary,
        GameConfig::default(),
        20,
        42,
        &ProgressBar::hidden(),
    )
    .unwrap();

    assert_eq!(result.games, 20);
    assert_eq!(result.wins + result.losses, 20);
    assert_eq!(result.distribution.values().sum::<usize>(), result.wins);
    assert!(result.distribution.keys().all(|&k| (1..=6).contains(&k)));
}

#[test]
fn score_reports_dictionary_membership() {
    let dictionary = Dictionary::embedded().unwrap();
    let result = score_words("erase", "speed", &dictionary).unwrap();
    assert_eq!(result.feedback.to_string(), "Y--YY");
    assert!(result.guess_in_dictionary);
    assert!(result.secret_in_dictionary);

    assert!(score_words("toolong", "speed", &dictionary).is_err());
}
