//! Display functions for command results

use super::formatters::length_badge;
use crate::commands::CheckResult;
use crate::validation::Verdict;
use colored::Colorize;

/// Print the result of checking words against a root word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &result.entries {
        let shown = if entry.word.is_empty() {
            "(empty)".bright_black().to_string()
        } else {
            entry.word.bright_white().bold().to_string()
        };

        match entry.verdict {
            Verdict::Accepted => {
                println!(
                    "\n{} {} {}",
                    "✓".green().bold(),
                    shown,
                    length_badge(entry.word.chars().count()).bright_black()
                );
            }
            Verdict::Rejected(reason) => {
                println!("\n{} {} {}", "✗".red().bold(), shown, reason.title().red());
                if let Some(message) = &entry.message {
                    println!("  {message}");
                }
            }
        }
    }

    println!();
    let accepted = result.accepted();
    let summary = format!("{accepted} of {} accepted", result.entries.len());
    if accepted == result.entries.len() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.yellow().bold());
    }
}
