//! Display functions for command results

use super::formatters::{create_progress_bar, format_rejection, letter_badge};
use crate::commands::{AnalysisResult, CheckReport, SurveyStatistics};
use crate::core::letter_count;
use colored::Colorize;

/// Print the outcome of each checked word
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Root word: {}", report.root.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (candidate, outcome) in &report.outcomes {
        match outcome {
            Ok(accepted) => println!(
                "\n✅ {} {} +{}",
                accepted.word.bright_green().bold(),
                letter_badge(accepted.points),
                accepted.points
            ),
            Err(rejection) => {
                println!("\n{:?}", candidate.trim());
                println!("{}", format_rejection(rejection));
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Score is: {} ({} accepted, {} rejected)",
            report.score,
            report.accepted_count(),
            report.rejected_count()
        )
        .bright_blue()
        .bold()
    );
}

/// Print what a root word can produce
pub fn print_analysis_result(result: &AnalysisResult, list_words: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_dictionary {
        println!("\n⚠️  {}", "Root word is not in the dictionary".yellow());
    }

    println!("\n📊 Against the dictionary:");
    println!("   Derivable words: {}", result.derivable.len());
    println!(
        "   Maximum score:   {}",
        result.max_score.to_string().bright_yellow()
    );
    if let Some(longest) = &result.longest {
        println!(
            "   Longest word:    {} {}",
            longest.bright_green(),
            letter_badge(letter_count(longest))
        );
    }

    if list_words && !result.derivable.is_empty() {
        println!("\n📖 {}", "Words:".bright_cyan().bold());
        for word in &result.derivable {
            println!("   {word:<12} {}", letter_badge(letter_count(word)));
        }
    }
}

/// Print survey statistics over the root word pool
pub fn print_survey_statistics(stats: &SurveyStatistics, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:    {}", stats.roots.len());
    println!("   Avg derivable:     {:.1}", stats.average_derivable);
    println!(
        "   Avg max score:     {}",
        format!("{:.1}", stats.average_max_score).bright_yellow().bold()
    );
    println!("   Time taken:        {:.2}s", stats.total_time.as_secs_f64());

    let best = stats.best().map_or(0, |s| s.max_score) as f64;
    println!("\n📈 {}", "Top roots:".bright_cyan().bold());
    for summary in stats.roots.iter().take(top) {
        let bar = create_progress_bar(summary.max_score as f64, best, 30);
        println!(
            "   {:<10} {} {:4} pts ({} words)",
            summary.root,
            bar.green(),
            summary.max_score,
            summary.derivable_count
        );
    }

    if stats.unplayable.is_empty() {
        println!("\n{}", "✅ Every root word has derivable words".green());
    } else {
        println!(
            "\n{} {}",
            "⚠️  Roots with nothing to derive:".yellow().bold(),
            stats.unplayable.join(", ")
        );
    }
}
