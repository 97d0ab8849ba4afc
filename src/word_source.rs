//! Word Source: picks the secret word for a new session.
//!
//! The remote word service is tried first. Any failure (network, HTTP status,
//! bad body, a value that is not a word) is logged and recovered by drawing
//! from the local fallback list, so [`WordSource::fetch_word`] cannot fail.

use crate::debug_log;
use crate::session::Word;
use crate::wordbank::embedded_fallback;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://hangman-0zn1.onrender.com/api/random_word";

/// Upper bound for a single request to the word service.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("word service answered with HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("remote word service disabled")]
    Disabled,
}

/// The remote half of the word source.
///
/// Implementations return the raw `word` value; validation happens in
/// [`WordSource`].
pub trait RemoteWords {
    fn fetch(&self) -> Result<String, FetchError>;

    fn name(&self) -> &'static str;
}

impl<T: RemoteWords + ?Sized> RemoteWords for Box<T> {
    fn fetch(&self) -> Result<String, FetchError> {
        (**self).fetch()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
}

/// HTTP client for a service answering `GET` with `{ "word": "..." }`.
pub struct HttpWordService {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpWordService {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl RemoteWords for HttpWordService {
    fn fetch(&self) -> Result<String, FetchError> {
        debug_log!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: WordResponse = response
            .json()
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        Ok(body.word)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Stand-in remote for offline play: always fails, so every word comes from
/// the fallback list.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

impl RemoteWords for Offline {
    fn fetch(&self) -> Result<String, FetchError> {
        Err(FetchError::Disabled)
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}

pub struct WordSource<R> {
    remote: R,
    fallback: Vec<Word>,
    rng: StdRng,
}

impl<R: RemoteWords> WordSource<R> {
    /// An empty `fallback` is replaced by the embedded list.
    pub fn new(remote: R, fallback: Vec<Word>) -> Self {
        Self::with_rng(remote, fallback, StdRng::from_entropy())
    }

    /// Deterministic fallback picks, for tests.
    pub fn with_seed(remote: R, fallback: Vec<Word>, seed: u64) -> Self {
        Self::with_rng(remote, fallback, StdRng::seed_from_u64(seed))
    }

    fn with_rng(remote: R, fallback: Vec<Word>, rng: StdRng) -> Self {
        let fallback = if fallback.is_empty() {
            embedded_fallback()
        } else {
            fallback
        };
        Self {
            remote,
            fallback,
            rng,
        }
    }

    pub fn fetch_word(&mut self) -> Word {
        match self.fetch_remote() {
            Ok(word) => {
                log::info!("word received from {} source", self.remote.name());
                word
            }
            Err(FetchError::Disabled) => {
                debug_log!("remote disabled, using fallback list");
                self.pick_fallback()
            }
            Err(e) => {
                log::warn!(
                    "could not fetch word from {} source: {e}; falling back to local list",
                    self.remote.name()
                );
                self.pick_fallback()
            }
        }
    }

    fn fetch_remote(&self) -> Result<Word, FetchError> {
        let raw = self.remote.fetch()?;
        Word::parse(raw.trim())
            .ok_or_else(|| FetchError::Malformed(format!("not a word: {raw:?}")))
    }

    fn pick_fallback(&mut self) -> Word {
        self.fallback.choose(&mut self.rng).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn fallback(&self) -> &[Word] {
        &self.fallback
    }
}
