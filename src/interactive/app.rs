//! TUI application state and logic

use super::input::RowInput;
use crate::core::WORD_LENGTH;
use crate::dictionary::Dictionary;
use crate::engine::{Cell, GameConfig, GameError, GameStatus, GuessEngine};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient banner stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_millis(2000);

/// Event poll interval; bounds how late an expired banner disappears
const TICK: Duration = Duration::from_millis(100);

/// Most messages kept on screen at once
const MAX_MESSAGES: usize = 5;

const NEW_GAME_HINT: &str = "Press Enter for a new game or Esc to quit.";

/// Application state
pub struct App<'a> {
    pub engine: GuessEngine<'a>,
    pub input: RowInput,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    /// `None` keeps the message until the next game
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics, kept in memory only
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Index `n` counts wins on attempt `n + 1`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn new(max_attempts: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_attempts],
            ..Self::default()
        }
    }

    fn record(&mut self, status: GameStatus, attempts_used: usize) {
        match status {
            GameStatus::InProgress => return,
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                let slot = attempts_used.saturating_sub(1);
                if let Some(count) = self.guess_distribution.get_mut(slot) {
                    *count += 1;
                }
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unplayable.
    pub fn new(
        dictionary: &'a Dictionary,
        config: GameConfig,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let engine = GuessEngine::with_random_secret(dictionary, config, &mut rng)?;
        Ok(Self::with_engine(engine, rng))
    }

    /// Wrap an already started engine; `rng` draws the secrets of later games
    #[must_use]
    pub fn with_engine(engine: GuessEngine<'a>, rng: StdRng) -> Self {
        let max_attempts = engine.config().max_attempts;
        let mut app = Self {
            engine,
            input: RowInput::new(),
            messages: Vec::new(),
            stats: Statistics::new(max_attempts),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!("Guess the word in {max_attempts} tries. Type and press Enter."),
            MessageStyle::Info,
            Some(MESSAGE_TTL * 2),
        );
        app
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                if self.engine.status().is_over() {
                    self.new_game();
                } else {
                    self.submit();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(ch) if !ctrl && !self.engine.status().is_over() => {
                self.input.push(ch);
            }
            _ => {}
        }
    }

    /// Submit the active row to the engine
    pub fn submit(&mut self) {
        match self.engine.submit_guess(&self.input.as_string()) {
            Ok(result) => {
                self.input.clear();
                match result.status {
                    GameStatus::InProgress => {}
                    GameStatus::Won => {
                        self.stats.record(result.status, result.attempts_used);
                        let celebration = match result.attempts_used {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            6 => "😅 PHEW! Got it in six! 😅",
                            _ => "🎊 SOLVED! 🎊",
                        };
                        self.add_message(celebration, MessageStyle::Success, None);
                        self.add_message(NEW_GAME_HINT, MessageStyle::Info, None);
                    }
                    GameStatus::Lost => {
                        self.stats.record(result.status, result.attempts_used);
                        let secret = self
                            .engine
                            .revealed_secret()
                            .map(|w| w.text().to_uppercase())
                            .unwrap_or_default();
                        self.add_message(
                            &format!("Out of guesses! The word was {secret}"),
                            MessageStyle::Error,
                            None,
                        );
                        self.add_message(NEW_GAME_HINT, MessageStyle::Info, None);
                    }
                }
            }
            Err(err) if err.is_recoverable() => {
                self.add_message(&err.to_string(), MessageStyle::Error, Some(MESSAGE_TTL));
            }
            Err(err) => {
                tracing::error!(%err, "guess submission failed");
                self.add_message(&err.to_string(), MessageStyle::Error, None);
            }
        }
    }

    /// Abandon the current game and start a fresh one
    pub fn new_game(&mut self) {
        if let Err(err) = self.engine.new_game(&mut self.rng) {
            tracing::error!(%err, "failed to start new game");
            self.add_message(&err.to_string(), MessageStyle::Error, None);
            return;
        }
        self.input.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info, Some(MESSAGE_TTL));
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle, ttl: Option<Duration>) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Drop transient messages whose time is up
    pub fn prune_messages(&mut self, now: Instant) {
        self.messages
            .retain(|msg| msg.expires_at.is_none_or(|deadline| deadline > now));
    }

    /// Board grid with the row being typed overlaid on the active row
    #[must_use]
    pub fn grid(&self) -> Vec<[Cell; WORD_LENGTH]> {
        let mut grid = self.engine.board().cells();
        if let Some(row) = self
            .engine
            .turn()
            .active_row()
            .filter(|_| !self.engine.status().is_over())
            .and_then(|index| grid.get_mut(index))
        {
            for (cell, letter) in row.iter_mut().zip(self.input.cells()) {
                cell.letter = letter;
            }
        }
        grid
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.prune_messages(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        App::new(dictionary, GameConfig::default(), StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn typing_fills_active_row() {
        let dict = Dictionary::new(["crane", "slate"]).unwrap();
        let mut app = app(&dict);

        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Char('l')));
        let grid = app.grid();
        assert_eq!(grid[0][0].letter, Some('s'));
        assert_eq!(grid[0][1].letter, Some('l'));
        assert_eq!(grid[0][2].letter, None);
        assert!(grid[0][0].mark.is_none());
    }

    #[test]
    fn incomplete_row_shows_error_and_keeps_input() {
        let dict = Dictionary::new(["crane"]).unwrap();
        let mut app = app(&dict);

        type_word(&mut app, "cra");
        assert_eq!(app.input.as_string(), "cra");
        assert_eq!(app.engine.turn().attempts_used(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.expires_at.is_some());
    }

    #[test]
    fn winning_records_stats_and_enter_restarts() {
        let dict = Dictionary::new(["crane"]).unwrap();
        let mut app = app(&dict);

        type_word(&mut app, "crane");
        assert_eq!(app.engine.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[0], 1);

        // Letters are ignored once the game is over
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.input.is_empty());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine.status(), GameStatus::InProgress);
        assert!(app.engine.board().is_empty());
    }

    #[test]
    fn losing_reveals_secret_and_resets_streak() {
        use crate::core::Word;

        let dict = Dictionary::new(["crane", "slate"]).unwrap();
        let secret = Word::new("crane").unwrap();
        let engine = GuessEngine::new(&dict, GameConfig::new(1, true), secret).unwrap();
        let mut app = App::with_engine(engine, StdRng::seed_from_u64(4));
        app.stats.current_streak = 3;

        type_word(&mut app, "slate");
        assert_eq!(app.engine.status(), GameStatus::Lost);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.current_streak, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn transient_messages_expire() {
        let dict = Dictionary::new(["crane"]).unwrap();
        let mut app = app(&dict);

        app.add_message("sticky", MessageStyle::Info, None);
        app.add_message("brief", MessageStyle::Error, Some(Duration::from_millis(1)));
        app.prune_messages(Instant::now() + Duration::from_secs(60));

        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].text, "sticky");
    }

    #[test]
    fn statistics_track_streaks() {
        let mut stats = Statistics::new(6);
        stats.record(GameStatus::Won, 3);
        stats.record(GameStatus::Won, 4);
        stats.record(GameStatus::Lost, 6);
        stats.record(GameStatus::Won, 2);

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, vec![0, 1, 1, 1, 0, 0]);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ctrl_c_quits() {
        let dict = Dictionary::new(["crane"]).unwrap();
        let mut app = app(&dict);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
