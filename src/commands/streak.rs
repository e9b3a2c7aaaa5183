//! Streak and badge command

use crate::journal::{EntryStore, current_streak};
use crate::output;
use anyhow::Result;
use chrono::Local;

/// Print the current streak and any badge earned
///
/// # Errors
///
/// Returns an error when the store is unavailable.
pub fn run_streak(store: &EntryStore) -> Result<()> {
    let records = store.load()?;
    let days = current_streak(&records, Local::now().date_naive());
    output::print_streak(days);
    Ok(())
}
