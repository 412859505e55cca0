//! Loading the dictionary and parsing guess lists.

use crate::error::WordError;
use crate::word::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Default dictionary location, relative to the working directory.
pub const DEFAULT_DICTIONARY_PATH: &str = "wordle_answers.txt";

/// Parse a newline-delimited word list.
///
/// Blank lines are ignored. Any other line that is not a valid word is
/// reported and skipped; loading carries on with the rest.
pub fn load_dictionary_from_str(data: &str) -> Vec<Word> {
    data.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(number, line)| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("invalid dictionary line {}: {e}", number + 1);
                None
            }
        })
        .collect()
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let words = load_dictionary_from_str(&data);
    info!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a comma-separated list of guesses such as `trace,loins`.
pub fn parse_word_list(list: &str) -> Result<Vec<Word>, WordError> {
    if list.trim().is_empty() {
        return Err(WordError::EmptyList);
    }
    list.split(',').map(Word::new).collect()
}
