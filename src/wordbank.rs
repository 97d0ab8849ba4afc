use crate::session::Word;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_FALLBACK: &str = include_str!("resources/fallback_words.txt");

/// The fallback list shipped with the binary.
#[must_use]
pub fn embedded_fallback() -> Vec<Word> {
    load_wordbank_from_str(EMBEDDED_FALLBACK)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    data.lines().filter_map(|line| Word::parse(line.trim())).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = Word::parse(line?.trim()) {
            words.push(word);
        }
    }
    Ok(words)
}
