// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod figure;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod tui;
pub mod word_source;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game_state::{GameInterface, Tally, UserAction, game_loop};
pub use session::{GuessOutcome, GuessResult, MAX_LIVES, Session, SessionStatus, Word};
pub use word_source::{
    DEFAULT_ENDPOINT, FetchError, HttpWordService, Offline, RemoteWords, WordSource,
};
pub use wordbank::{embedded_fallback, load_wordbank_from_file, load_wordbank_from_str};
