//! Verse scramble game, interactive CLI mode
//!
//! Text-based loop: show the shuffled words of a verse, read reconstructions
//! until the player nails it or gives up.

use super::resolve_theme;
use crate::catalog;
use crate::game::ScramblePuzzle;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the scramble game for the chosen theme
///
/// # Errors
///
/// Returns an error for an unknown theme or an I/O error reading input.
pub fn run_scramble(theme_name: &str) -> Result<()> {
    let theme = resolve_theme(theme_name)?;
    let mut verse = catalog::random_verse(theme);
    let mut puzzle = ScramblePuzzle::new(verse.text);

    println!("\n{}", "🧩 Verse Scramble".bright_cyan().bold());
    println!("Put the words of the verse back in order.");
    println!(
        "{}",
        "Commands: 'shuffle' to reshuffle, 'new' for another verse, 'show' to reveal, 'quit' to exit"
            .bright_black()
    );

    loop {
        println!("\n{}", verse.reference.bright_yellow().bold());
        println!("  {}", puzzle.tokens().join(" / "));

        let answer = get_user_input("Your reconstruction")?;
        match answer.as_str() {
            "" => {}
            "quit" => break,
            "new" => {
                verse = catalog::random_verse(theme);
                puzzle = ScramblePuzzle::new(verse.text);
            }
            "shuffle" => puzzle.reshuffle(),
            "show" => println!("\n  {}", puzzle.original().italic()),
            _ => {
                if puzzle.check(&answer) {
                    println!("\n{}", "✅ Word perfect! Well done.".green().bold());
                    break;
                }
                println!("{}", "❌ Not quite. Try again, or type 'show' to reveal.".red());
            }
        }
    }

    Ok(())
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    // EOF on a pipe ends the game rather than spinning
    if bytes == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
