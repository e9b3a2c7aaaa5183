//! Journal history command

use crate::journal::EntryStore;
use crate::output;
use anyhow::Result;
use colored::Colorize;

/// Print every recorded entry, newest first
///
/// # Errors
///
/// Returns an error when the store is unavailable.
pub fn run_history(store: &EntryStore) -> Result<()> {
    let mut records = store.load()?;

    if records.is_empty() {
        println!(
            "{}",
            "No entries yet. Run `selah check-in` to add your first gratitude.".yellow()
        );
        return Ok(());
    }

    // Newest first; rows with an invalid timestamp sink to the bottom
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    output::print_history(&records);
    Ok(())
}
