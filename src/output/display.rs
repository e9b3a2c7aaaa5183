//! Display functions for command results

use super::formatters::{badge_emoji, guess_cells, streak_meter};
use crate::catalog::Verse;
use crate::game::{GameSession, GameState};
use crate::journal::{Badge, GratitudeRecord};
use colored::Colorize;

/// Print a verse as a quoted block
pub fn print_verse(verse: &Verse) {
    println!();
    println!("  {}", verse.reference.bright_yellow().bold());
    println!("  {}", format!("“{}”", verse.text).italic());
    println!();
}

/// Print recorded entries, assumed already sorted newest first
pub fn print_history(records: &[GratitudeRecord]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "GRATITUDE HISTORY".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for record in records {
        let when = if record.timestamp.is_some() {
            record.format_timestamp()
        } else {
            "(unknown time)".to_string()
        };

        println!(
            "\n{}  {}",
            when.bright_black(),
            record.verse_ref.bright_yellow()
        );
        for line in record.entry.lines() {
            println!("  {line}");
        }
    }

    println!();
}

/// Print the board of a finished game, one row per guess
pub fn print_game_recap(session: &GameSession) {
    if session.guesses().is_empty() {
        return;
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "YOUR GAME".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, (word, feedback)) in session.guesses().iter().enumerate() {
        println!(
            "\nGuess {}: {}   {}",
            i + 1,
            guess_cells(word, *feedback),
            feedback.to_emoji()
        );
    }

    println!();
    match session.state() {
        GameState::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", session.guesses().len())
                .green()
                .bold()
        ),
        GameState::Exhausted => println!(
            "{}",
            format!("❌ Out of guesses. The word was {}.", session.target())
                .red()
                .bold()
        ),
        GameState::InProgress => {}
    }
}

/// Print the streak count, badge, and progress toward the next tier
pub fn print_streak(days: u32) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "ACHIEVEMENTS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    let day_word = if days == 1 { "day" } else { "days" };
    println!(
        "\n  Current streak: {}",
        format!("{days} {day_word}").bright_yellow().bold()
    );

    match Badge::for_streak(days) {
        Some(badge) => println!(
            "  Badge:          {} {}",
            badge_emoji(badge),
            badge.to_string().green().bold()
        ),
        None => println!("  Badge:          {}", "none yet".bright_black()),
    }

    println!("  Progress:       [{}]", streak_meter(days, 30).green());
    println!(
        "  {}",
        "Bronze at 3 days, Silver at 7, Gold at 30.".bright_black()
    );
    println!();
}
