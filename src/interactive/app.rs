//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::game::{Game, Outcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<D, R> {
    pub game: Game<D, R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub input_mode: InputMode,
    pub hidden_words: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

/// A rejection waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary + Sync, R: Rng> App<D, R> {
    #[must_use]
    pub fn new(game: Game<D, R>) -> Self {
        let hidden_words = game.hint_count();

        Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Each letter once per word, and no made-up words!".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            alert: None,
            input_mode: InputMode::Typing,
            hidden_words,
            should_quit: false,
        }
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            Outcome::Accepted(word) => {
                self.hidden_words = self.game.hint_count();
                self.add_message(
                    &format!("Found '{word}'! {} words still hidden", self.hidden_words),
                    MessageStyle::Success,
                );
            }
            Outcome::Ignored => {}
            Outcome::Rejected { reason, message } => {
                // Keep the typed word so it can be corrected
                self.input_buffer = input;
                self.add_message(reason.title(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message,
                });
                self.input_mode = InputMode::Alert;
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
        self.hidden_words = self.game.hint_count();
        self.input_buffer.clear();
        self.dismiss_alert();
        self.messages.clear();
        self.add_message(
            &format!(
                "New game! Root word: {}",
                self.game.session().root().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
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
pub fn run_tui<D: Dictionary + Sync, R: Rng>(app: App<D, R>) -> Result<()> {
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

fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut app: App<D, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary + Sync,
    R: Rng,
{
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
