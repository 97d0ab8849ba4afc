use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{self, LogTarget};
use hangman::tui::TuiInterface;
use hangman::{
    DEFAULT_ENDPOINT, GameInterface, HttpWordService, Offline, RemoteWords, WordSource, game_loop,
    load_wordbank_from_file,
};
use std::io;
use std::process::ExitCode;

fn remote(offline: bool) -> Box<dyn RemoteWords> {
    if offline {
        return Box::new(Offline);
    }
    match HttpWordService::new(DEFAULT_ENDPOINT) {
        Ok(service) => Box::new(service),
        Err(e) => {
            log::warn!("could not build HTTP client: {e}; playing offline");
            Box::new(Offline)
        }
    }
}

fn run<I: GameInterface>(source: &mut WordSource<Box<dyn RemoteWords>>, interface: &mut I) {
    let tally = game_loop(source, interface);
    log::info!("session over: won {}, lost {}", tally.won, tally.lost);
}

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(if cli.tui {
        LogTarget::File
    } else {
        LogTarget::Stderr
    });

    let fallback = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Vec::new(),
    };
    if cli.wordbank_path.is_some() && fallback.is_empty() {
        eprintln!("Word list contains no usable words; using the built-in list.");
    }

    let mut source = WordSource::new(remote(cli.offline), fallback);

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        };
        run(&mut source, &mut interface);
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        run(&mut source, &mut interface);
    }

    ExitCode::SUCCESS
}
