//! Word list loading utilities
//!
//! Parses newline-delimited word lists from text or files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load a word list
///
/// The game cannot start without its word lists, so callers treat this as an
/// initialization failure rather than something to recover from.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The word list file could not be read.
    #[error("could not load word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Split newline-delimited text into words
///
/// One word per line, no escaping, no comments. Lines are trimmed, lowercased
/// and blank lines skipped, so a trailing newline never produces an empty word.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::split_words;
///
/// let words = split_words("Silkworm\nnotebook\n\n");
/// assert_eq!(words, vec!["silkworm", "notebook"]);
/// ```
#[must_use]
pub fn split_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = split_words(&content);
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
