//! Daily verse command

use super::resolve_theme;
use crate::catalog;
use crate::output;
use anyhow::Result;
use colored::Colorize;

/// Print a random verse for the chosen theme
///
/// # Errors
///
/// Returns an error for an unknown theme.
pub fn run_verse(theme_name: &str) -> Result<()> {
    let theme = resolve_theme(theme_name)?;
    let verse = catalog::random_verse(theme);

    println!("\n{}", "📜 Daily Verse".bright_cyan().bold());
    output::print_verse(verse);
    println!(
        "{}",
        "Let this verse guide your day. Run `selah check-in` to reflect.".bright_black()
    );
    Ok(())
}
