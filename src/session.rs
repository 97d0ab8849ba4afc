//! Game session state machine.
//!
//! A [`Session`] owns everything about one playthrough: the secret [`Word`],
//! the remaining lives and the letters guessed so far. It never renders
//! anything itself; callers submit guesses and render the returned
//! [`GuessResult`] and the derived view state.
//!
//! # State Machine
//! - `InProgress` → `Won` when every letter of the word has been guessed
//! - `InProgress` → `Lost` when lives reach zero
//! - `Won` and `Lost` are terminal: every further guess is rejected

use crate::word_source::{RemoteWords, WordSource};
use std::collections::BTreeSet;
use std::fmt;

/// Lives at the start of every session.
pub const MAX_LIVES: u8 = 6;

const HIDDEN_LETTER: char = '_';

/// An uppercase, non-empty sequence of letters A-Z.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Accept `raw` if it is made only of ASCII letters, uppercased.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(raw.to_ascii_uppercase()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Last-resort word when no fallback list is available.
impl Default for Word {
    fn default() -> Self {
        Self(String::from("HANGMAN"))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Per-guess result code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    RejectedGameOver,
    RejectedInvalidInput,
    RejectedAlreadyGuessed,
}

impl GuessOutcome {
    /// Whether the guess was applied to the session.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Correct | Self::Incorrect)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: GuessOutcome,
    pub status: SessionStatus,
}

#[derive(Clone, Debug)]
pub struct Session {
    word: Word,
    lives: u8,
    guessed: BTreeSet<char>,
    status: SessionStatus,
}

impl Session {
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            lives: MAX_LIVES,
            guessed: BTreeSet::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Start a fresh session with a word from `source`. Cannot fail: the
    /// source falls back to its local list when the remote call does not work.
    pub fn start<R: RemoteWords>(source: &mut WordSource<R>) -> Self {
        Self::new(source.fetch_word())
    }

    pub fn guess(&mut self, input: &str) -> GuessResult {
        let outcome = self.apply_guess(input);
        GuessResult {
            outcome,
            status: self.status,
        }
    }

    fn apply_guess(&mut self, input: &str) -> GuessOutcome {
        if self.status.is_terminal() {
            return GuessOutcome::RejectedGameOver;
        }

        let Some(letter) = parse_letter(input) else {
            return GuessOutcome::RejectedInvalidInput;
        };

        if !self.guessed.insert(letter) {
            return GuessOutcome::RejectedAlreadyGuessed;
        }

        let outcome = if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            self.lives = self.lives.saturating_sub(1);
            GuessOutcome::Incorrect
        };
        self.status = self.compute_status();
        outcome
    }

    // Won is checked first: a completing guess is always correct.
    fn compute_status(&self) -> SessionStatus {
        if self.word.as_str().chars().all(|c| self.guessed.contains(&c)) {
            SessionStatus::Won
        } else if self.lives == 0 {
            SessionStatus::Lost
        } else {
            SessionStatus::InProgress
        }
    }

    /// Space-separated tokens, one per letter of the word, with unguessed
    /// letters shown as `_`.
    #[must_use]
    pub fn render_word(&self) -> String {
        self.word
            .as_str()
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c
                } else {
                    HIDDEN_LETTER
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn lives_remaining(&self) -> u8 {
        self.lives
    }

    #[must_use]
    pub fn incorrect_guesses(&self) -> u8 {
        MAX_LIVES - self.lives
    }

    /// Guessed letters in ascending order.
    #[must_use]
    pub fn guessed_so_far(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }
}

fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_none() && letter.is_ascii_uppercase() {
        Some(letter)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> Session {
        Session::new(Word::parse(word).unwrap())
    }

    #[test]
    fn test_word_parse_uppercases() {
        assert_eq!(Word::parse("cat").unwrap().as_str(), "CAT");
        assert_eq!(Word::parse("Dog").unwrap().as_str(), "DOG");
    }

    #[test]
    fn test_word_parse_rejects_non_letters() {
        assert!(Word::parse("").is_none());
        assert!(Word::parse("ice-cream").is_none());
        assert!(Word::parse("abc1").is_none());
        assert!(Word::parse("two words").is_none());
        assert!(Word::parse("café").is_none());
        assert!(Word::parse("straße").is_none());
        assert!(Word::parse("\u{FB01}sh").is_none());
        assert!(Word::parse("\u{131}rk").is_none());
    }

    #[test]
    fn test_new_session_starts_in_progress() {
        let s = session("CAT");
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.lives_remaining(), MAX_LIVES);
        assert!(s.guessed_so_far().is_empty());
        assert_eq!(s.render_word(), "_ _ _");
    }

    #[test]
    fn test_cat_scenario() {
        let mut s = session("CAT");

        let r = s.guess("A");
        assert_eq!(r.outcome, GuessOutcome::Correct);
        assert_eq!(r.status, SessionStatus::InProgress);
        assert_eq!(s.render_word(), "_ A _");

        assert_eq!(s.guess("C").outcome, GuessOutcome::Correct);
        let r = s.guess("T");
        assert_eq!(r.outcome, GuessOutcome::Correct);
        assert_eq!(r.status, SessionStatus::Won);
        assert_eq!(s.render_word(), "C A T");
        assert_eq!(s.lives_remaining(), MAX_LIVES);
    }

    #[test]
    fn test_dog_scenario_loses_after_six_misses() {
        let mut s = session("DOG");
        for (i, letter) in ["Q", "W", "X", "Z", "V", "J"].iter().enumerate() {
            let r = s.guess(letter);
            assert_eq!(r.outcome, GuessOutcome::Incorrect);
            assert_eq!(s.lives_remaining() as usize, 5 - i);
        }
        assert_eq!(s.status(), SessionStatus::Lost);
        assert_eq!(s.incorrect_guesses(), 6);

        let r = s.guess("D");
        assert_eq!(r.outcome, GuessOutcome::RejectedGameOver);
        assert_eq!(r.status, SessionStatus::Lost);
        assert_eq!(s.lives_remaining(), 0);
        assert!(!s.guessed_so_far().contains(&'D'));
    }

    #[test]
    fn test_invalid_input_leaves_state_unchanged() {
        let mut s = session("DOG");
        s.guess("O");
        for input in ["1", "ab", "", " ", "?", "é"] {
            let r = s.guess(input);
            assert_eq!(r.outcome, GuessOutcome::RejectedInvalidInput, "input {input:?}");
        }
        assert_eq!(s.lives_remaining(), MAX_LIVES);
        assert_eq!(s.guessed_so_far(), vec!['O']);
    }

    #[test]
    fn test_lowercase_and_padded_input_normalized() {
        let mut s = session("DOG");
        assert_eq!(s.guess("d").outcome, GuessOutcome::Correct);
        assert_eq!(s.guess("  g \n").outcome, GuessOutcome::Correct);
        assert_eq!(s.render_word(), "D _ G");
    }

    #[test]
    fn test_repeat_guess_rejected() {
        let mut s = session("DOG");
        assert_eq!(s.guess("Z").outcome, GuessOutcome::Incorrect);
        let lives = s.lives_remaining();
        let guessed = s.guessed_so_far();

        assert_eq!(s.guess("z").outcome, GuessOutcome::RejectedAlreadyGuessed);
        assert_eq!(s.lives_remaining(), lives);
        assert_eq!(s.guessed_so_far(), guessed);

        assert_eq!(s.guess("O").outcome, GuessOutcome::Correct);
        assert_eq!(s.guess("O").outcome, GuessOutcome::RejectedAlreadyGuessed);
    }

    #[test]
    fn test_game_over_check_precedes_input_validation() {
        let mut s = session("A");
        assert_eq!(s.guess("A").status, SessionStatus::Won);
        assert_eq!(s.guess("ab").outcome, GuessOutcome::RejectedGameOver);
        assert_eq!(s.guess("A").outcome, GuessOutcome::RejectedGameOver);
    }

    #[test]
    fn test_guessed_letters_sorted() {
        let mut s = session("HANGMAN");
        for letter in ["N", "Z", "A", "B"] {
            s.guess(letter);
        }
        assert_eq!(s.guessed_so_far(), vec!['A', 'B', 'N', 'Z']);
    }

    #[test]
    fn test_repeated_letters_revealed_together() {
        let mut s = session("BANANA");
        s.guess("A");
        assert_eq!(s.render_word(), "_ A _ A _ A");
        s.guess("N");
        assert_eq!(s.render_word(), "_ A N A N A");
    }

    #[test]
    fn test_render_word_idempotent() {
        let mut s = session("RUST");
        s.guess("S");
        assert_eq!(s.render_word(), s.render_word());
    }

    #[test]
    fn test_win_on_last_life() {
        let mut s = session("OX");
        for letter in ["A", "B", "C", "D", "E"] {
            s.guess(letter);
        }
        assert_eq!(s.lives_remaining(), 1);
        s.guess("O");
        let r = s.guess("X");
        assert_eq!(r.status, SessionStatus::Won);
        assert_eq!(s.lives_remaining(), 1);
    }

    #[test]
    fn test_lives_only_decrease_and_status_never_reverses() {
        let mut s = session("PYTHON");
        let mut previous_lives = s.lives_remaining();
        let mut terminal_seen = None;
        for letter in "QAZPWSXEDCRFVTGBYHNUJMIKOL".chars() {
            let r = s.guess(&letter.to_string());
            let lives = s.lives_remaining();
            assert!(lives <= MAX_LIVES);
            match r.outcome {
                GuessOutcome::Incorrect => assert_eq!(lives, previous_lives - 1),
                _ => assert_eq!(lives, previous_lives),
            }
            previous_lives = lives;

            if let Some(status) = terminal_seen {
                assert_eq!(r.outcome, GuessOutcome::RejectedGameOver);
                assert_eq!(r.status, status);
            } else if r.status.is_terminal() {
                terminal_seen = Some(r.status);
            }
        }
        assert!(terminal_seen.is_some());
    }
}
