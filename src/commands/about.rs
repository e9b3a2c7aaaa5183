//! About command

use anyhow::Result;
use colored::Colorize;

/// Print what the app is for
///
/// # Errors
///
/// Never fails; the `Result` keeps the command signatures uniform.
pub fn run_about() -> Result<()> {
    println!("\n{}", "ℹ️  About Selah".bright_cyan().bold());
    println!("\nSelah helps you:");
    for line in [
        "Reflect on God's goodness daily",
        "Record gratitude entries",
        "Receive relevant Bible verses",
        "Review your entries over time",
        "Play scripture word games and build a streak",
    ] {
        println!("  • {line}");
    }
    println!("\n{}", "Built by Chris Comiskey.".bright_black());
    Ok(())
}
