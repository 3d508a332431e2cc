//! Derivable word search
//!
//! Finds every word in a word list that a root word's letters can spell.

use super::letters::LetterCounts;
use super::word::{letter_count, normalize};
use rayon::prelude::*;

/// All words composable from `root`, excluding the root itself
///
/// Sorted longest-first, then alphabetically. Duplicates in `words` are
/// reported once.
///
/// # Examples
/// ```
/// use word_scramble::core::derivable_words;
///
/// let words = ["listen", "silt", "tinsel", "ssilt", "zest", "lit"];
/// assert_eq!(derivable_words("listen", &words), vec!["tinsel", "silt", "lit"]);
/// ```
#[must_use]
pub fn derivable_words<S>(root: &str, words: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    let root = normalize(root);
    let letters = LetterCounts::new(&root);

    let mut found: Vec<String> = words
        .par_iter()
        .map(|word| -> &str { word.as_ref() })
        .filter(|word| !word.is_empty() && *word != root && letters.can_spell(word))
        .map(str::to_string)
        .collect();

    found.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    found.dedup();
    found
}

/// Highest score a round on `root` can reach with this word list
///
/// The sum of letter counts of every derivable word.
#[must_use]
pub fn max_score<S>(root: &str, words: &[S]) -> usize
where
    S: AsRef<str> + Sync,
{
    total_score(&derivable_words(root, words))
}

/// Points earned by accepting every word in `words`
///
/// # Examples
/// ```
/// use word_scramble::core::total_score;
///
/// assert_eq!(total_score(&["tinsel", "silt", "lit"]), 13);
/// ```
#[must_use]
pub fn total_score<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|word| letter_count(word.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;

    #[test]
    fn excludes_root_and_impossible_words() {
        let words = ["silkworm", "silk", "worm", "worms", "milks", "silks"];
        let found = derivable_words("silkworm", &words);
        assert_eq!(found, vec!["milks", "worms", "silk", "worm"]);
    }

    #[test]
    fn root_is_normalized() {
        let words = ["silk", "worm"];
        assert_eq!(derivable_words("  SILKWORM\n", &words), vec!["silk", "worm"]);
    }

    #[test]
    fn skips_empty_entries_and_duplicates() {
        let words = ["", "worm", "worm"];
        assert_eq!(derivable_words("silkworm", &words), vec!["worm"]);
    }

    #[test]
    fn empty_word_list() {
        let words: [&str; 0] = [];
        assert!(derivable_words("silkworm", &words).is_empty());
        assert_eq!(max_score("silkworm", &words), 0);
    }

    #[test]
    fn max_score_sums_letter_counts() {
        let words = ["silk", "worm", "is", "zebra"];
        assert_eq!(max_score("silkworm", &words), 10);
    }

    #[test]
    fn max_score_is_total_of_derivable_words() {
        let words = ["tinsel", "silt", "lit", "zest"];
        assert_eq!(max_score("listen", &words), 13);
        assert_eq!(
            max_score("listen", &words),
            total_score(&derivable_words("listen", &words))
        );
    }

    #[test]
    fn total_score_counts_characters() {
        assert_eq!(total_score::<&str>(&[]), 0);
        assert_eq!(total_score(&["é", "ab"]), 3);
    }

    #[test]
    fn embedded_dictionary_finds_silkworm_derivatives() {
        let found = derivable_words("silkworm", DICTIONARY);
        assert!(found.contains(&"worm".to_string()));
        assert!(found.contains(&"silk".to_string()));
        assert!(found.contains(&"milk".to_string()));
        assert!(!found.contains(&"silkworm".to_string()));
    }
}
