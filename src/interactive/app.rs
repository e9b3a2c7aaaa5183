//! TUI application state and logic

use crate::core::{WORD_LEN, Word};
use crate::game::{GUESS_LIMIT, GameSession, GameState, GuessError};
use crate::wordpool;
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state for the word game
pub struct App {
    pub session: GameSession,
    pub words: Vec<Word>,
    pub free_mode: bool,
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; GUESS_LIMIT + 1],
}

impl App {
    #[must_use]
    pub fn new(session: GameSession, words: Vec<Word>, free_mode: bool) -> Self {
        let mode_hint = if free_mode {
            "Free play: a fresh word every game."
        } else {
            "Daily word: everyone plays the same word today."
        };

        Self {
            session,
            words,
            free_mode,
            input: String::new(),
            messages: vec![
                Message {
                    text: "Guess the 5-letter word!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: mode_hint.to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Target for the next game under the current mode
    fn next_target(&self) -> Option<Word> {
        if self.free_mode {
            wordpool::random_target(&self.words)
        } else {
            wordpool::daily_target(&self.words, Local::now().date_naive())
        }
    }

    pub fn new_game(&mut self) {
        if let Some(target) = self.next_target() {
            self.session.reset(target);
            self.input.clear();
            self.add_message("New game started!", MessageStyle::Info);
        } else {
            self.add_message("Word pool is empty!", MessageStyle::Error);
        }
    }

    /// Submit the current input buffer as a guess
    pub fn submit_input(&mut self) {
        let raw = self.input.clone();

        match self.session.submit_guess(&raw) {
            Ok(_) => {
                self.input.clear();
                match self.session.state() {
                    GameState::Solved => self.celebrate(),
                    GameState::Exhausted => {
                        self.stats.games_played += 1;
                        let target = self.session.target().text().to_string();
                        self.add_message(
                            &format!("Out of guesses! The word was {target}."),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameState::InProgress => {
                        if let Some(remaining) = self.session.guesses_remaining() {
                            self.add_message(
                                &format!("{remaining} guesses left"),
                                MessageStyle::Info,
                            );
                        }
                    }
                }
            }
            Err(GuessError::Invalid(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(GuessError::Finished(_)) => {
                self.add_message(
                    "Game over. Press 'n' for a new game or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
        }
    }

    fn celebrate(&mut self) {
        self.stats.games_played += 1;
        self.stats.games_won += 1;

        let guess_count = self.session.guesses().len();
        if guess_count <= GUESS_LIMIT {
            self.stats.guess_distribution[guess_count] += 1;
        }

        let celebration = match guess_count {
            1 => "🎯 FIRST GUESS! Remarkable! 🌟".to_string(),
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
            3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
            4 => "👏 GREAT JOB! Four guesses! 👏".to_string(),
            5 => "🎉 NICE WORK! Five guesses! 🎉".to_string(),
            6 => "😅 PHEW! Got it in six! 😅".to_string(),
            n => format!("🎊 SOLVED in {n} guesses! 🎊"),
        };

        self.add_message(&celebration, MessageStyle::Success);
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
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
}

/// Run the TUI application
///
/// Returns the final application state so the caller can show a recap of the
/// last game.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(app)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.session.is_over() {
                // Letters are free once the game is done
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) => {
                        if app.input.len() < WORD_LEN && c.is_ascii_alphabetic() {
                            app.input.push(c.to_ascii_uppercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Enter => {
                        if app.input.len() == WORD_LEN {
                            app.submit_input();
                        } else {
                            app.add_message(
                                &format!("Word must be exactly {WORD_LEN} letters!"),
                                MessageStyle::Error,
                            );
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
