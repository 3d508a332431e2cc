//! Survey the root word pool
//!
//! Runs the derivation search for every root word and summarizes how playable
//! each one is against the dictionary.

use crate::core::{derivable_words, total_score};
use crate::game::RootWordPool;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Derivation summary for one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub derivable_count: usize,
    pub max_score: usize,
}

/// Statistics over the surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    /// Surveyed roots, highest max score first
    pub roots: Vec<RootSummary>,
    /// Roots with nothing to derive
    pub unplayable: Vec<String>,
    pub average_derivable: f64,
    pub average_max_score: f64,
    pub total_time: Duration,
}

impl SurveyStatistics {
    #[must_use]
    pub fn best(&self) -> Option<&RootSummary> {
        self.roots.first()
    }

    #[must_use]
    pub fn worst(&self) -> Option<&RootSummary> {
        self.roots.last()
    }
}

/// Survey the pool (or its first `limit` words) against `dictionary_words`
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_survey<S>(
    pool: &RootWordPool,
    dictionary_words: &[S],
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics
where
    S: AsRef<str> + Sync,
{
    let roots: Vec<&String> = pool
        .words()
        .iter()
        .take(limit.unwrap_or(pool.len()))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(roots.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut summaries = Vec::with_capacity(roots.len());

    for root in roots {
        pb.set_message(root.clone());
        let derivable = derivable_words(root, dictionary_words);
        summaries.push(RootSummary {
            root: root.clone(),
            derivable_count: derivable.len(),
            max_score: total_score(&derivable),
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    tracing::info!(roots = summaries.len(), elapsed = ?start.elapsed(), "survey finished");

    summarize(summaries, start.elapsed())
}

fn summarize(mut roots: Vec<RootSummary>, total_time: Duration) -> SurveyStatistics {
    roots.sort_by(|a, b| {
        b.max_score
            .cmp(&a.max_score)
            .then_with(|| a.root.cmp(&b.root))
    });

    let unplayable = roots
        .iter()
        .filter(|summary| summary.derivable_count == 0)
        .map(|summary| summary.root.clone())
        .collect();

    let count = roots.len().max(1) as f64;
    let average_derivable = roots.iter().map(|s| s.derivable_count).sum::<usize>() as f64 / count;
    let average_max_score = roots.iter().map(|s| s.max_score).sum::<usize>() as f64 / count;

    SurveyStatistics {
        roots,
        unplayable,
        average_derivable,
        average_max_score,
        total_time,
    }
}
