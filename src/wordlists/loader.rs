//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use crate::error::{LoadError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a newline-delimited word list from a file
///
/// Entries are trimmed and lowercased. Blank lines and entries containing anything
/// other than letters are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, and `LoadError::EmptyWordList`
/// if no usable entries remain.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    info!("Loading word list from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(content.lines());
    if words.is_empty() {
        return Err(LoadError::EmptyWordList {
            path: path.to_path_buf(),
        });
    }

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    parse_words(slice.iter().copied())
}

fn parse_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter_map(|line| {
            let word = normalize(line);
            if word.is_empty() {
                None
            } else if word.chars().all(char::is_alphabetic) {
                Some(word)
            } else {
                debug!("Skipping word list entry {word:?}");
                None
            }
        })
        .collect()
}
