//! Gratitude check-in command
//!
//! Shows a verse for the chosen theme, takes the user's gratitude text, and
//! appends a record to the journal. Empty submissions are rejected before
//! anything touches the store.

use super::resolve_theme;
use crate::catalog;
use crate::journal::{EntryStore, GratitudeRecord};
use crate::output;
use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::io::{self, Read};

/// Run the check-in flow
///
/// When `entry` is `None` the text is read from stdin.
///
/// # Errors
///
/// Returns an error for an unknown theme, an empty entry, or an unavailable
/// store.
pub fn run_checkin(store: &EntryStore, theme_name: &str, entry: Option<&str>) -> Result<()> {
    let theme = resolve_theme(theme_name)?;
    let verse = catalog::random_verse(theme);

    println!("\n{}", "🙏 Daily Check-In".bright_cyan().bold());
    println!("{}", "Reflect and give thanks.".bright_black());
    output::print_verse(verse);

    let text = match entry {
        Some(text) => text.to_string(),
        None => read_entry_from_stdin()?,
    };

    let record = GratitudeRecord::new(
        &text,
        verse.reference,
        verse.text,
        Local::now().naive_local(),
    )?;
    store.append(record)?;

    println!("{}", "🎉 Your gratitude has been recorded!".green().bold());
    Ok(())
}

fn read_entry_from_stdin() -> Result<String> {
    println!(
        "{}",
        "What are you grateful for today? (finish with Ctrl-D)".bold()
    );

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read entry")?;
    Ok(text)
}
