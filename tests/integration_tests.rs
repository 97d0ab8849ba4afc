// Integration tests for the hangman application
// These tests verify that all modules work together correctly

use hangman::cli::CliInterface;
use hangman::*;
use std::io::Cursor;

struct Failing;

impl RemoteWords for Failing {
    fn fetch(&self) -> Result<String, FetchError> {
        Err(FetchError::Malformed("simulated outage".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

struct Fixed(&'static str);

impl RemoteWords for Fixed {
    fn fetch(&self) -> Result<String, FetchError> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

fn single_word_source(word: &str) -> WordSource<Offline> {
    WordSource::with_seed(Offline, vec![Word::parse(word).unwrap()], 0)
}

fn play(source: &mut WordSource<impl RemoteWords>, input: &str) -> Tally {
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    game_loop(source, &mut interface)
}

#[test]
fn test_end_to_end_win() {
    let tally = play(&mut single_word_source("CAT"), "a\nc\nt\nexit\n");
    assert_eq!(tally, Tally { won: 1, lost: 0 });
}

#[test]
fn test_end_to_end_loss() {
    let tally = play(&mut single_word_source("DOG"), "q\nw\nx\nz\nv\nj\nk\nexit\n");
    assert_eq!(tally, Tally { won: 0, lost: 1 });
}

#[test]
fn test_end_of_input_ends_game() {
    // No explicit exit: running out of input must not loop forever
    let tally = play(&mut single_word_source("DOG"), "d\no\n");
    assert_eq!(tally.played(), 0);
}

#[test]
fn test_invalid_and_repeated_input_do_not_cost_lives() {
    // 1, ab, repeated z and blank lines are all free; five misses leave one life
    let input = "1\nab\n\nz\nz\nZ\nq\nw\nx\nv\nd\no\ng\nexit\n";
    let tally = play(&mut single_word_source("DOG"), input);
    assert_eq!(tally, Tally { won: 1, lost: 0 });
}

#[test]
fn test_multiple_games_with_next() {
    let input = "r\nu\ns\nt\nnext\nq\nw\nx\nz\nv\nj\nnext\nr\nexit\n";
    let tally = play(&mut single_word_source("RUST"), input);
    assert_eq!(tally, Tally { won: 1, lost: 1 });
}

#[test]
fn test_guess_after_game_over_is_rejected() {
    let mut source = single_word_source("A");
    let mut session = Session::start(&mut source);
    assert_eq!(session.guess("a").status, SessionStatus::Won);

    let before = (session.lives_remaining(), session.guessed_so_far());
    let result = session.guess("b");
    assert_eq!(result.outcome, GuessOutcome::RejectedGameOver);
    assert_eq!(result.status, SessionStatus::Won);
    assert_eq!((session.lives_remaining(), session.guessed_so_far()), before);
}

#[test]
fn test_remote_outage_falls_back_to_embedded_list() {
    let embedded = embedded_fallback();
    let mut source = WordSource::new(Failing, Vec::new());
    for _ in 0..10 {
        let word = source.fetch_word();
        assert!(!word.is_empty());
        assert!(word.as_str().chars().all(|c| c.is_ascii_uppercase()));
        assert!(embedded.contains(&word));
    }
}

#[test]
fn test_remote_word_drives_session() {
    let mut source = WordSource::with_seed(Fixed("cargo"), Vec::new(), 0);
    let session = Session::start(&mut source);
    assert_eq!(session.word().as_str(), "CARGO");
    assert_eq!(session.render_word(), "_ _ _ _ _");
    assert_eq!(session.lives_remaining(), MAX_LIVES);
    assert_eq!(session.status(), SessionStatus::InProgress);
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("hangman_integration_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "ox").unwrap();
        writeln!(file, "not a word").unwrap();
    }

    let words = load_wordbank_from_file(&path).unwrap();
    assert_eq!(words, vec![Word::parse("OX").unwrap()]);

    let mut source = WordSource::with_seed(Offline, words, 0);
    let tally = play(&mut source, "o\nx\nexit\n");
    assert_eq!(tally, Tally { won: 1, lost: 0 });

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_new_session_replaces_old_state() {
    let mut source = single_word_source("DOG");
    let mut session = Session::start(&mut source);
    session.guess("q");
    session.guess("d");

    session = Session::start(&mut source);
    assert_eq!(session.lives_remaining(), MAX_LIVES);
    assert!(session.guessed_so_far().is_empty());
    assert_eq!(session.render_word(), "_ _ _");
}
