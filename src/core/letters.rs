//! Letter multiset
//!
//! A word's letters as counts, so a candidate may reuse a letter only as many
//! times as the root word contains it.

use rustc_hash::FxHashMap;

/// Count of each letter in a word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::new("listen");
    /// assert_eq!(counts.count('s'), 1);
    /// assert_eq!(counts.count('z'), 0);
    /// assert_eq!(counts.len(), 6);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut total = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check whether `word` can be spelled from these letters
    ///
    /// Each character of `word` consumes one matching occurrence from a working
    /// copy; spelling fails as soon as a character has no occurrence left.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(left) if *left > 0 => *left -= 1,
                _ => return false,
            }
        }
        true
    }
}

/// Check whether `candidate` is composable from the letters of `root`
///
/// # Examples
/// ```
/// use word_scramble::core::is_composable;
///
/// assert!(is_composable("silt", "listen"));
/// assert!(!is_composable("ssilt", "listen")); // only one 's'
/// ```
#[must_use]
pub fn is_composable(candidate: &str, root: &str) -> bool {
    LetterCounts::new(root).can_spell(candidate)
}
