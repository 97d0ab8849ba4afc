use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "hangman.log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to the log file; used while the TUI owns the terminal.
    File,
}

/// `<data_local_dir>/hangman/hangman.log`
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("hangman").join(LOG_FILE_NAME))
}

fn open_log_file() -> Option<File> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the global logger. `RUST_LOG` overrides the default `warn` filter.
/// Logging stays off if the log file cannot be opened in `File` mode.
pub fn init(target: LogTarget) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File => match open_log_file() {
            Some(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => return,
        },
    }

    // A logger may already be installed (tests, embedding).
    let _ = builder.try_init();
}
