//! Root word analysis command
//!
//! Lists every dictionary word a root word can produce and the best possible score.

use crate::core::{derivable_words, normalize, total_score};
use crate::dictionary::{Dictionary, WordListDictionary};
use anyhow::{Result, bail};

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root: String,
    pub in_dictionary: bool,
    pub derivable: Vec<String>,
    pub max_score: usize,
    pub longest: Option<String>,
}

/// Analyze what `root` can produce against a dictionary
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn analyze_root(root: &str, dictionary: &WordListDictionary) -> Result<AnalysisResult> {
    let root = normalize(root);
    if root.is_empty() {
        bail!("Root word must not be blank");
    }

    let words = dictionary.sorted_words();
    let derivable = derivable_words(&root, &words);
    let max_score = total_score(&derivable);
    let longest = derivable.first().cloned();

    Ok(AnalysisResult {
        in_dictionary: dictionary.is_valid_english_word(&root),
        root,
        derivable,
        max_score,
        longest,
    })
}
