//! TUI application state and logic

use crate::commands::find_spellable_words;
use crate::core::{Rejection, Round, ValidationOutcome};
use crate::game::{GameEngine, WordListDictionary};
use crate::output::{Alert, rejection_alert};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: &'a GameEngine,
    pub candidates: &'a [String],
    pub dictionary: &'a WordListDictionary,
    pub round: Round,
    /// Score for finding every word the current root allows
    pub max_score: usize,
    pub input_buffer: String,
    /// Rejection alert waiting to be dismissed
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub best_score: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        engine: &'a GameEngine,
        candidates: &'a [String],
        dictionary: &'a WordListDictionary,
        mut rng: StdRng,
    ) -> Self {
        let round = engine.start_round_with_rng(candidates, &mut rng);
        let max_score = find_spellable_words(engine, round.root_word(), dictionary).max_score;

        let mut app = Self {
            engine,
            candidates,
            dictionary,
            round,
            max_score,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            stats: Statistics {
                rounds_played: 1,
                best_score: 0,
            },
            should_quit: false,
            rng,
        };

        app.add_message(
            "Welcome! Spell words using the letters of the root word.",
            MessageStyle::Info,
        );
        app.add_message("Enter submits, Tab changes the word.", MessageStyle::Info);
        app
    }

    /// Replace the current round with a fresh one
    pub fn new_round(&mut self) {
        self.record_best();
        self.round = self
            .engine
            .start_round_with_rng(self.candidates, &mut self.rng);
        self.max_score =
            find_spellable_words(self.engine, self.round.root_word(), self.dictionary).max_score;
        self.stats.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;

        self.add_message(
            &format!("New word: {}", self.round.root_word().to_uppercase()),
            MessageStyle::Info,
        );
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let outcome = self.engine.submit_guess(&mut self.round, &input, self.dictionary);

        match outcome {
            ValidationOutcome::Accepted(word) => {
                self.record_best();
                self.add_message(
                    &format!("+{} for {}", word.chars().count(), word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            // Enter on a blank field is not worth an alert
            ValidationOutcome::Rejected(Rejection::Empty) => {}
            ValidationOutcome::Rejected(reason) => {
                let alert = rejection_alert(reason, self.round.root_word());
                self.add_message(&alert.title, MessageStyle::Error);
                self.alert = Some(alert);
                // Keep the rejected text so it can be edited
                self.input_buffer = input;
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn record_best(&mut self) {
        self.stats.best_score = self.stats.best_score.max(self.round.score());
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.new_round(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
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
    let mut terminal = or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let final_score = res?;
    println!("Thanks for playing! Final score: {final_score}");
    Ok(())
}

/// Leave raw mode and the alternate screen, ignoring failures
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run `setup`, calling `restore` before passing on its error
fn or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<usize> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.round.score())
}
