//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `Loading` → `EnteringGuess` once a word has been fetched
//! - `EnteringGuess` → `GameOver` when the session is won or lost
//! - `GameOver` → `Loading` when a new game is requested

use crate::cli::{game_over_message, guessed_letters_line, lives_message, outcome_message};
use crate::figure;
use crate::game_state::{GameInterface, Tally, UserAction};
use crate::session::{GuessOutcome, GuessResult, Session, SessionStatus};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const FIGURE_WIDTH: u16 = 16;
const BOARD_HEIGHT: u16 = 9;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    /// Waiting on the word source; input is ignored.
    Loading,
    EnteringGuess,
    GameOver,
}

/// What the board shows, copied out of the session after every change.
#[derive(Debug, Default, Clone)]
struct Board {
    word_display: String,
    lives: u8,
    incorrect: u8,
    guessed: String,
}

impl Board {
    fn from_session(session: &Session) -> Self {
        Self {
            word_display: session.render_word(),
            lives: session.lives_remaining(),
            incorrect: session.incorrect_guesses(),
            guessed: guessed_letters_line(session),
        }
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    board: &'a Board,
    current_input: &'a str,
    state: TuiState,
    message: &'a str,
    message_style: Style,
    error_message: &'a str,
    status: &'a str,
}

fn outcome_style(outcome: GuessOutcome) -> Style {
    match outcome {
        GuessOutcome::Correct => SUCCESS_STYLE,
        GuessOutcome::Incorrect => ERROR_STYLE,
        GuessOutcome::RejectedGameOver
        | GuessOutcome::RejectedInvalidInput
        | GuessOutcome::RejectedAlreadyGuessed => INFO_STYLE,
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
    current_input: String,
    state: TuiState,
    message: String,
    message_style: Style,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            board: Board::default(),
            current_input: String::new(),
            state: TuiState::Loading,
            message: String::new(),
            message_style: MESSAGE_STYLE,
            error_message: String::new(),
            status: "Starting".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: &self.board,
            current_input: &self.current_input,
            state: self.state,
            message: &self.message,
            message_style: self.message_style,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(BOARD_HEIGHT), // Figure + word
                Constraint::Min(5),               // Info panel
                Constraint::Length(3),            // Status line
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FIGURE_WIDTH), Constraint::Min(10)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_figure(f, board[0], ctx.board.incorrect);
        Self::render_word(f, board[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_figure(f: &mut Frame, area: Rect, incorrect: u8) {
        let lines: Vec<Line> = figure::stage(incorrect).lines().map(Line::from).collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if ctx.state == TuiState::Loading {
            lines.push(Line::from(Span::styled("Fetching a word...", MESSAGE_STYLE)));
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", ctx.board.word_display),
                WORD_STYLE,
            )));
            lines.push(Line::from(""));
            if ctx.state == TuiState::EnteringGuess {
                let shown = if ctx.current_input.is_empty() {
                    "_"
                } else {
                    ctx.current_input
                };
                lines.push(Line::from(vec![
                    Span::raw("  Your guess: "),
                    Span::styled(
                        format!(" {shown} "),
                        Style::default().fg(Color::White).bg(Color::DarkGray),
                    ),
                ]));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if ctx.state != TuiState::Loading {
            let lives_style = if ctx.board.lives <= 1 {
                ERROR_STYLE
            } else {
                INFO_STYLE
            };
            lines.push(Line::from(Span::styled(
                lives_message(ctx.board.lives),
                lives_style,
            )));
            lines.push(Line::from(format!("Guessed: {}", ctx.board.guessed)));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.message, ctx.message_style)));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Loading => "Please wait...",
            TuiState::EnteringGuess => "Type a letter | ENTER: Guess | BACKSPACE: Clear | ESC: Quit",
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event received: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );

        Ok(match self.state {
            TuiState::Loading => None,
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        })
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Esc => return Some(UserAction::Exit),
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_guess_input() - Ignoring modified key: {:?}", key.modifiers);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.current_input = c.to_ascii_uppercase().to_string();
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => self.current_input.clear(),
            KeyCode::Enter if !self.current_input.is_empty() => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = "Type a letter first!".to_string();
            }
            _ => {}
        }
        None
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_loading(&mut self) {
        self.state = TuiState::Loading;
        self.current_input.clear();
        self.error_message.clear();
        self.message.clear();
        self.status = "Fetching a word...".to_string();
        self.draw_or_log();
    }

    fn display_new_game(&mut self, session: &Session) {
        self.board = Board::from_session(session);
        self.state = TuiState::EnteringGuess;
        self.message = format!("New game started. The word has {} letters.", session.word().len());
        self.message_style = MESSAGE_STYLE;
        self.status = "Guess a letter".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    debug_log!("read_guess() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_guess_result(&mut self, input: &str, result: &GuessResult, session: &Session) {
        self.board = Board::from_session(session);
        self.message = outcome_message(input, result.outcome);
        self.message_style = outcome_style(result.outcome);
        self.draw_or_log();
    }

    fn display_game_over(&mut self, session: &Session, tally: &Tally) {
        self.state = TuiState::GameOver;
        self.message = game_over_message(session);
        self.message_style = match session.status() {
            SessionStatus::Won => SUCCESS_STYLE,
            _ => ERROR_STYLE,
        };
        self.status = format!("Game Over - Won {} / Lost {}", tally.won, tally.lost);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, _tally: &Tally) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
