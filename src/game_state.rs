use crate::info_log;
use crate::session::{GuessResult, Session, SessionStatus};
use crate::word_source::{RemoteWords, WordSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Games finished during one run of [`game_loop`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub won: u32,
    pub lost: u32,
}

impl Tally {
    fn record(&mut self, status: SessionStatus) {
        match status {
            SessionStatus::Won => self.won += 1,
            SessionStatus::Lost => self.lost += 1,
            SessionStatus::InProgress => {}
        }
    }

    #[must_use]
    pub fn played(&self) -> u32 {
        self.won + self.lost
    }
}

/// Front end driven by [`game_loop`]. Implementations only present state;
/// every rule lives in [`Session`].
pub trait GameInterface {
    /// A word is being fetched; no input is read until `display_new_game`.
    fn display_loading(&mut self);
    fn display_new_game(&mut self, session: &Session);
    /// `None` means nothing actionable was read; the loop asks again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_guess_result(&mut self, input: &str, result: &GuessResult, session: &Session);
    fn display_game_over(&mut self, session: &Session, tally: &Tally);
    fn display_exit_message(&mut self, tally: &Tally);
}

fn new_session<R: RemoteWords, I: GameInterface>(
    source: &mut WordSource<R>,
    interface: &mut I,
) -> Session {
    interface.display_loading();
    let session = Session::start(source);
    info_log!("new session, word length {}", session.word().len());
    interface.display_new_game(&session);
    session
}

pub fn game_loop<R: RemoteWords, I: GameInterface>(
    source: &mut WordSource<R>,
    interface: &mut I,
) -> Tally {
    let mut tally = Tally::default();
    let mut session = new_session(source, interface);

    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message(&tally);
                break;
            }
            UserAction::NewGame => {
                session = new_session(source, interface);
            }
            UserAction::Guess(input) => {
                let result = session.guess(&input);
                info_log!("guess {:?} -> {:?}", input, result);
                interface.display_guess_result(&input, &result, &session);

                if result.outcome.is_accepted() && result.status.is_terminal() {
                    tally.record(result.status);
                    interface.display_game_over(&session, &tally);
                }
            }
        }
    }

    tally
}
