//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::game::{DictionaryChecker, GameEngine};
use crate::output::{print_outcome, print_round, score_label};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Commands start with `/` so they never collide with a guess.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<D, R>(
    engine: &GameEngine,
    candidates: &[String],
    dictionary: &D,
    rng: &mut R,
) -> Result<()>
where
    D: DictionaryChecker + ?Sized,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell real words from the letters of the root word.");
    println!(
        "Words need at least {} letters and score one point per letter.\n",
        engine.config().min_word_length
    );
    println!("Commands: '/new' for a new word, '/score' to show progress, '/quit' to exit\n");

    let mut round = engine.start_round_with_rng(candidates, rng);
    print_round(&round);

    loop {
        let Some(input) = get_user_input(&format!("Guess ({})", round.root_word()))? else {
            // stdin closed
            println!();
            break;
        };

        match input.as_str() {
            "/quit" | "/q" | "/exit" => break,
            "/new" | "/n" => {
                round = engine.start_round_with_rng(candidates, rng);
                println!("\n🔄 New word!");
                print_round(&round);
            }
            "/score" | "/s" => print_round(&round),
            _ => {
                let outcome = engine.submit_guess(&mut round, &input, dictionary);
                print_outcome(&outcome, round.root_word());
                if outcome.is_accepted() {
                    println!("  Score: {}", score_label(round.score()).bright_cyan());
                }
            }
        }
    }

    println!(
        "\n👋 Thanks for playing! Final score: {}\n",
        score_label(round.score()).bright_yellow().bold()
    );
    Ok(())
}

/// Get user input with a prompt
///
/// Returns `None` once stdin reaches end of file.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
