//! Terminal output formatting
//!
//! Display utilities for CLI results and the interactive game.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_check_report, print_survey_statistics};
