//! Batch check command
//!
//! Submits a list of words against a fixed root word and reports each outcome.

use crate::dictionary::Dictionary;
use crate::game::{Accepted, GameState, Rejection};
use anyhow::{Result, bail};

/// Outcome of checking a list of candidates
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub root: String,
    pub outcomes: Vec<(String, Result<Accepted, Rejection>)>,
    pub score: usize,
}

impl CheckReport {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.is_ok()).count()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.accepted_count()
    }
}

/// Submit `candidates` in order to a fresh round on `root`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn check_words<D, S>(root: &str, candidates: &[S], dictionary: &D) -> Result<CheckReport>
where
    D: Dictionary + ?Sized,
    S: AsRef<str>,
{
    let mut state = GameState::new(root);
    if state.root_word().is_empty() {
        bail!("Root word must not be blank");
    }

    let outcomes = candidates
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            (candidate.to_string(), state.submit(candidate, dictionary))
        })
        .collect();

    Ok(CheckReport {
        root: state.root_word().to_string(),
        outcomes,
        score: state.score(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    #[test]
    fn reports_each_outcome_in_order() {
        let dictionary = WordListDictionary::embedded();
        let report = check_words(
            "listen",
            &["silt", "ssilt", "silt", "listen", "qqq", "sits"],
            &dictionary,
        )
        .unwrap();

        assert_eq!(report.root, "listen");
        assert_eq!(report.outcomes.len(), 6);
        assert!(report.outcomes[0].1.is_ok());
        // not a word, so the dictionary rejects it before the letters are counted
        assert_eq!(report.outcomes[1].1, Err(Rejection::NotARealWord));
        assert_eq!(report.outcomes[2].1, Err(Rejection::AlreadyUsed));
        assert_eq!(report.outcomes[3].1, Err(Rejection::IdenticalToRoot));
        assert_eq!(report.outcomes[4].1, Err(Rejection::NotARealWord));
        // a real word needing a second 's'
        assert_eq!(
            report.outcomes[5].1,
            Err(Rejection::NotComposable {
                root: "listen".to_string()
            })
        );
        assert_eq!(report.score, 4);
        assert_eq!(report.accepted_count(), 1);
        assert_eq!(report.rejected_count(), 5);
    }

    #[test]
    fn root_is_normalized() {
        let dictionary = WordListDictionary::embedded();
        let report = check_words(" SILKWORM ", &["worm"], &dictionary).unwrap();
        assert_eq!(report.root, "silkworm");
        assert_eq!(report.score, 4);
    }

    #[test]
    fn blank_root_is_an_error() {
        let dictionary = WordListDictionary::embedded();
        assert!(check_words("  ", &["worm"], &dictionary).is_err());
    }

    #[test]
    fn no_candidates() {
        let dictionary = WordListDictionary::embedded();
        let candidates: [&str; 0] = [];
        let report = check_words("silkworm", &candidates, &dictionary).unwrap();
        assert!(report.outcomes.is_empty());
        assert_eq!(report.score, 0);
    }
}
