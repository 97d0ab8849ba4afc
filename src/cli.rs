use crate::debug_log;
use crate::figure;
use crate::game_state::{GameInterface, Tally, UserAction};
use crate::session::{GuessOutcome, GuessResult, Session, SessionStatus};
use clap::Parser;
use std::io::BufRead;

/// Hangman: guess the hidden word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited fallback word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Never contact the remote word service
    #[arg(long)]
    pub offline: bool,

    /// Run the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

#[derive(Debug, PartialEq, Eq)]
pub enum GuessInput {
    Letter(String),
    Empty,
    Exit,
    NewGame,
}

/// Read one line. End of input and read errors both end the game.
pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nEnter a letter ('next' for a new game, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => return GuessInput::Exit,
        Ok(_) => {}
        Err(e) => {
            debug_log!("read_guess() - read error: {}", e);
            return GuessInput::Exit;
        }
    }
    let input = input.trim().to_ascii_uppercase();

    match input.as_str() {
        "EXIT" => GuessInput::Exit,
        "NEXT" => GuessInput::NewGame,
        "" => GuessInput::Empty,
        _ => GuessInput::Letter(input),
    }
}

/// One line describing what a guess did.
#[must_use]
pub fn outcome_message(input: &str, outcome: GuessOutcome) -> String {
    let letter = input.trim().to_ascii_uppercase();
    match outcome {
        GuessOutcome::Correct => format!("Good guess! \"{letter}\" is in the word."),
        GuessOutcome::Incorrect => format!("\"{letter}\" is not in the word. You lost a life!"),
        GuessOutcome::RejectedInvalidInput => "Please enter a single letter (A-Z).".to_string(),
        GuessOutcome::RejectedAlreadyGuessed => {
            format!("You already guessed \"{letter}\". Try another letter!")
        }
        GuessOutcome::RejectedGameOver => {
            "The game is over. Type 'next' to play again or 'exit' to quit.".to_string()
        }
    }
}

#[must_use]
pub fn game_over_message(session: &Session) -> String {
    match session.status() {
        SessionStatus::Won => "Congratulations! You won the game!".to_string(),
        SessionStatus::Lost => format!("Game Over! The word was \"{}\".", session.word()),
        SessionStatus::InProgress => String::new(),
    }
}

#[must_use]
pub fn lives_message(lives: u8) -> String {
    if lives == 1 {
        "1 life left!".to_string()
    } else {
        format!("{lives} lives left!")
    }
}

#[must_use]
pub fn guessed_letters_line(session: &Session) -> String {
    session
        .guessed_so_far()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_board(session: &Session) {
    println!("{}", figure::stage(session.incorrect_guesses()));
    println!();
    println!("Word: {}", session.render_word());
    println!("{}", lives_message(session.lives_remaining()));
    println!("Guessed: {}", guessed_letters_line(session));
}

pub fn display_tally(tally: &Tally) {
    println!("Won {}, lost {}.", tally.won, tally.lost);
}

/// CLI implementation of the `GameInterface` trait over any line reader.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_loading(&mut self) {
        println!("Fetching a word...");
    }

    fn display_new_game(&mut self, session: &Session) {
        println!("New game started. The word has {} letters.", session.word().len());
        display_board(session);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Letter(letter) => Some(UserAction::Guess(letter)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Empty => None,
        }
    }

    fn display_guess_result(&mut self, input: &str, result: &GuessResult, session: &Session) {
        println!("{}", outcome_message(input, result.outcome));
        if result.outcome.is_accepted() {
            display_board(session);
        }
    }

    fn display_game_over(&mut self, session: &Session, tally: &Tally) {
        println!("{}", game_over_message(session));
        display_tally(tally);
    }

    fn display_exit_message(&mut self, tally: &Tally) {
        if tally.played() > 0 {
            display_tally(tally);
        }
        println!("Exiting.");
    }
}
