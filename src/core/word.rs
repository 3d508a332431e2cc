//! Candidate word normalization
//!
//! Player input is compared, stored and scored in its normalized form.

/// Normalize raw player input: lowercase, then trim surrounding whitespace
///
/// Interior whitespace is kept, so multi-word input still reaches the
/// dictionary check and fails there.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("WORM"), "worm");
/// assert_eq!(normalize(" \t "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}

/// Number of letters a word is worth
///
/// Counts characters, not bytes.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
