//! ASCII gallows, one stage per incorrect guess.

use crate::session::MAX_LIVES;

const STAGES: [&str; MAX_LIVES as usize + 1] = [
    r"  +---+
  |   |
      |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Gallows drawing after `incorrect` wrong guesses; clamps past the last stage.
#[must_use]
pub fn stage(incorrect: u8) -> &'static str {
    STAGES[usize::from(incorrect).min(STAGES.len() - 1)]
}
