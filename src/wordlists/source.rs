//! Runtime selection of word sources

use super::LoadError;
use crate::dictionary::WordListDictionary;
use crate::game::RootWordPool;
use std::path::PathBuf;

/// Where a word list comes from
///
/// Parsed from a CLI value: `embedded` selects the list compiled into the
/// binary, anything else is a path to a newline-delimited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// List compiled into the binary
    Embedded,
    /// Newline-delimited file
    File(PathBuf),
}

impl WordSource {
    /// Create a source from its CLI name
    ///
    /// # Examples
    /// ```
    /// use std::path::PathBuf;
    /// use word_scramble::wordlists::WordSource;
    ///
    /// assert_eq!(WordSource::from_name("embedded"), WordSource::Embedded);
    /// assert_eq!(
    ///     WordSource::from_name("words.txt"),
    ///     WordSource::File(PathBuf::from("words.txt"))
    /// );
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load a dictionary from this source
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a file source cannot be read.
    pub fn load_dictionary(&self) -> Result<WordListDictionary, LoadError> {
        match self {
            Self::Embedded => Ok(WordListDictionary::embedded()),
            Self::File(path) => WordListDictionary::load_from_file(path),
        }
    }

    /// Load a root word pool from this source
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a file source cannot be read.
    pub fn load_root_word_pool(&self) -> Result<RootWordPool, LoadError> {
        match self {
            Self::Embedded => Ok(RootWordPool::embedded()),
            Self::File(path) => RootWordPool::load_from_file(path),
        }
    }
}
