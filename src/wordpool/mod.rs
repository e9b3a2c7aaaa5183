//! Word pool for the guessing game
//!
//! A small embedded list of 5-letter devotional words, plus target selection.
//! In daily mode the target is derived from the calendar date, so every
//! session on a given day plays the same word; in free mode each session
//! draws its own target at random.

use crate::core::Word;
use chrono::{Datelike, NaiveDate};
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Embedded word pool, uppercase, 5 letters each
pub const POOL: &[&str] = &[
    "FAITH", "GRACE", "MERCY", "PEACE", "GLORY", "LIGHT", "TRUTH", "BREAD", "CROSS", "TRUST",
    "PSALM", "ANGEL", "ALTAR", "BLESS", "SAINT", "HEART", "SERVE", "HONOR", "CROWN", "KNEEL",
    "EXALT", "ADORE", "ABIDE", "MANNA", "TITHE", "CREED", "ELDER", "FLOCK", "DWELL", "STONE",
];

/// Convert the embedded pool to `Word` values
#[must_use]
pub fn pool_words() -> Vec<Word> {
    POOL.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Pick the target for a calendar date
///
/// The index is derived from the day number, so the same date always maps to
/// the same word. Returns `None` for an empty pool.
#[must_use]
pub fn daily_target(words: &[Word], date: NaiveDate) -> Option<Word> {
    if words.is_empty() {
        return None;
    }
    let day = i64::from(date.num_days_from_ce());
    let index = day.rem_euclid(words.len() as i64) as usize;
    Some(words[index].clone())
}

/// Draw a target uniformly at random
///
/// Returns `None` for an empty pool.
#[must_use]
pub fn random_target(words: &[Word]) -> Option<Word> {
    words.choose(&mut rand::rng()).cloned()
}

/// Load a custom word pool from a file, one word per line
///
/// Invalid lines are skipped rather than failing the load.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}
