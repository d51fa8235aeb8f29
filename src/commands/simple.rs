//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::dictionary::Dictionary;
use crate::game::{Game, Outcome};
use crate::output::formatters::{found_bar, length_badge};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the prompt.
pub fn run_simple<D: Dictionary + Sync, R: Rng>(game: &mut Game<D, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Each letter can be used once per word, and every word must be real.\n");
    println!("Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n");

    print_root(game);

    loop {
        let Some(input) = get_user_input("Word")? else {
            // EOF
            break;
        };

        match input.as_str() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                game.new_game();
                println!("\n🔄 New game started!\n");
                print_root(game);
            }
            ":words" | ":w" => print_words(game),
            _ => match game.submit(&input) {
                Outcome::Accepted(word) => {
                    println!(
                        "  {} {} {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        length_badge(word.chars().count()).bright_black()
                    );
                    print_progress(game);
                }
                Outcome::Ignored => {}
                Outcome::Rejected { reason, message } => {
                    println!("  {} {}", "✗".red().bold(), reason.title().red().bold());
                    println!("    {message}");
                }
            },
        }
    }

    let session = game.session();
    println!(
        "\n👋 Thanks for playing! You found {} {} ({} letters).\n",
        session.words_found(),
        if session.words_found() == 1 { "word" } else { "words" },
        session.letters_found()
    );

    Ok(())
}

fn print_root<D: Dictionary + Sync, R>(game: &Game<D, R>) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Root word: {}",
        game.session().root().text().to_uppercase().bright_yellow().bold()
    );
    println!("────────────────────────────────────────────────────────────\n");
    print_progress(game);
}

fn print_progress<D: Dictionary + Sync, R>(game: &Game<D, R>) {
    let found = game.session().words_found();
    let remaining = game.hint_count();
    println!(
        "  [{}] {found} found, {remaining} still hidden\n",
        found_bar(found, remaining, 20).green()
    );
}

fn print_words<D, R>(game: &Game<D, R>) {
    let words = game.session().used_words();
    if words.is_empty() {
        println!("  No words yet.\n");
        return;
    }

    for word in words {
        println!(
            "  {} {}",
            length_badge(word.chars().count()).bright_black(),
            word
        );
    }
    println!();
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
