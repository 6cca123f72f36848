//! Display functions for command results

use super::formatters::{length_badge, rejection_alert, score_label};
use crate::commands::{CheckReport, HintReport};
use crate::core::{Round, ValidationOutcome};
use colored::Colorize;

/// Print the outcome of one guess
pub fn print_outcome(outcome: &ValidationOutcome, root_word: &str) {
    match outcome {
        ValidationOutcome::Accepted(word) => {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                word.bright_white().bold(),
                format!("+{}", word.chars().count()).green()
            );
        }
        ValidationOutcome::Rejected(reason) => {
            let alert = rejection_alert(*reason, root_word);
            println!("{} {}", "✗".red().bold(), alert.title.red().bold());
            println!("  {}", alert.message.bright_black());
        }
    }
}

/// Print the root word, score and used words of a round
pub fn print_round(round: &Round) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Root word: {}   Score: {}",
        round.root_word().to_uppercase().bright_yellow().bold(),
        score_label(round.score()).bright_cyan()
    );
    println!("{}", "─".repeat(40).cyan());

    if round.used_words().is_empty() {
        println!("{}", "No words yet".bright_black());
    } else {
        for word in round.used_words() {
            println!("  {} {}", length_badge(word.chars().count()), word);
        }
    }
    println!();
}

/// Print the result of the check command
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "CHECKING AGAINST:".bright_cyan().bold(),
        report.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    for step in &report.steps {
        println!("\n{} {}", "›".bright_black(), step.input);
        print_outcome(&step.outcome, &report.root_word);
    }

    println!(
        "\n{} of {} accepted, {}",
        report.accepted_count().to_string().green().bold(),
        report.steps.len(),
        score_label(report.score).bright_yellow().bold()
    );
}

/// Print the result of the words command
pub fn print_hint_report(report: &HintReport, limit: Option<usize>) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} ",
        "WORDS IN".bright_cyan().bold(),
        report.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());

    let shown = limit.unwrap_or(report.words.len());
    for word in report.words.iter().take(shown) {
        println!("  {} {}", length_badge(word.chars().count()), word);
    }

    if shown < report.words.len() {
        println!(
            "  {}",
            format!("… and {} more", report.words.len() - shown).bright_black()
        );
    }

    println!(
        "\n📊 {} words, {} available",
        report.words.len().to_string().bright_cyan().bold(),
        score_label(report.max_score).bright_yellow().bold()
    );
}
