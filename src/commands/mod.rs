//! Command implementations

pub mod analyze;
pub mod check;
pub mod play;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_root};
pub use check::{CheckReport, check_words};
pub use play::{PlayCommand, play_session, run_play, start_game};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
