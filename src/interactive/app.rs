//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{WORD_LEN, Word};
use crate::error::{CommandError, GuessError};
use crate::lexicon::Lexicon;
use crate::solver::{AutoSolver, GuessRecord, MAX_GUESS_LIMIT, Outcome, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub lexicon: Lexicon,
    pub config: GameConfig,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    solver: AutoSolver,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    /// Waiting for y/n on adding an unknown word
    ConfirmAdd(Word),
    GameOver,
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
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by guess count; index 0 unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon is empty.
    pub fn new(lexicon: Lexicon, config: GameConfig) -> Result<Self, CommandError> {
        let mut rng = config.rng();
        let session = Session::random(&lexicon, config.max_guesses, &mut rng)?;

        let mut app = Self {
            lexicon,
            config,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; config.max_guesses.min(MAX_GUESS_LIMIT) + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Typing,
            solver: config.solver(),
            rng,
        };
        app.add_message("Welcome! Type a five-letter word and press Enter.", MessageStyle::Info);
        app.add_message("?: hint | Tab: solver guess | Ctrl-S: solve | Ctrl-N: new", MessageStyle::Info);
        Ok(app)
    }

    pub fn type_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LEN && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word as a guess
    pub fn submit_input(&mut self) {
        if self.input_buffer.len() != WORD_LEN {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let text = std::mem::take(&mut self.input_buffer);
        match self.session.submit(&self.lexicon, &text) {
            Ok(record) => self.after_guess(&record),
            Err(GuessError::NotInLexicon(_)) => match Word::new(&text) {
                Ok(word) => {
                    self.add_message(
                        &format!("{word} is not in the word list. Add it? (y/n)"),
                        MessageStyle::Error,
                    );
                    self.input_mode = InputMode::ConfirmAdd(word);
                }
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            },
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Answer the add-word prompt; on yes the word is added and played
    pub fn confirm_add(&mut self, accept: bool) {
        let InputMode::ConfirmAdd(word) = self.input_mode.clone() else {
            return;
        };
        self.input_mode = InputMode::Typing;

        if !accept {
            self.add_message(&format!("{word} not added"), MessageStyle::Info);
            return;
        }

        match self.lexicon.add_word(word.as_str()) {
            Ok(word) => {
                self.add_message(&format!("Added {word} to the word list"), MessageStyle::Success);
                match self.session.submit(&self.lexicon, word.as_str()) {
                    Ok(record) => self.after_guess(&record),
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn hint(&mut self) {
        match self.solver.selector().hint(&self.lexicon, &mut self.rng) {
            Ok(word) => self.add_message(&format!("💡 Try {word}"), MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Let the solver play one guess
    pub fn auto_step(&mut self) {
        if let Some(record) = self.solver.step(&mut self.session, &self.lexicon, &mut self.rng) {
            self.input_buffer.clear();
            self.after_guess(&record);
        } else {
            self.check_finished();
        }
    }

    /// Let the solver finish the game
    pub fn auto_solve(&mut self) {
        while !self.session.is_over() {
            self.auto_step();
        }
    }

    pub fn new_game(&mut self) {
        if !self.session.is_over() {
            self.add_message(
                &format!("The word was {}", self.session.secret()),
                MessageStyle::Info,
            );
        }
        match Session::random(&self.lexicon, self.config.max_guesses, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.input_mode = InputMode::Typing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn after_guess(&mut self, record: &GuessRecord) {
        debug!("{} {}", record.word, record.evaluation);
        if !self.check_finished() {
            let remaining = self.session.remaining_guesses();
            self.add_message(
                &format!("{} {} | {remaining} left", record.word, record.evaluation.to_emoji()),
                MessageStyle::Info,
            );
        }
    }

    /// Record a finished game once; returns whether the game is over
    fn check_finished(&mut self) -> bool {
        let Some(outcome) = self.session.outcome().cloned() else {
            return false;
        };
        if self.input_mode == InputMode::GameOver {
            return true;
        }

        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        let secret = self.session.secret();

        match outcome {
            Outcome::Solved { guesses } => {
                self.stats.games_won += 1;
                let distribution = &mut self.stats.guess_distribution;
                if distribution.len() <= guesses {
                    distribution.resize(guesses + 1, 0);
                }
                if let Some(slot) = distribution.get_mut(guesses) {
                    *slot += 1;
                }

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message(
                    &format!("Out of guesses! The word was {secret}"),
                    MessageStyle::Error,
                );
            }
            Outcome::NoSolution(error) => {
                self.add_message(
                    &format!("Solver gave up ({error}). The word was {secret}"),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        true
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

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode.clone() {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::ConfirmAdd(_) => match key.code {
                KeyCode::Char('y' | 'Y') => self.confirm_add(true),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => self.confirm_add(false),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Char('s') if ctrl => self.auto_solve(),
                KeyCode::Char('?') => self.hint(),
                KeyCode::Tab => self.auto_step(),
                KeyCode::Char(c) => self.type_char(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
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
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
