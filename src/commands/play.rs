//! Word game launcher
//!
//! Builds the word pool and the opening session, then hands off to the TUI.

use crate::game::{GameMode, GameSession};
use crate::interactive::{App, run_tui};
use crate::output;
use crate::wordpool;
use anyhow::{Context, Result, bail};
use chrono::Local;
use std::path::Path;

/// Start the guessing game
///
/// `wordlist` overrides the embedded pool with a custom file. In free mode
/// the target is random per game; otherwise it is the word of the day.
///
/// # Errors
///
/// Returns an error when a custom wordlist cannot be read or yields no valid
/// words, or on a terminal I/O failure.
pub fn run_play(wordlist: Option<&Path>, free: bool, unlimited: bool) -> Result<()> {
    let words = match wordlist {
        Some(path) => wordpool::load_from_file(path)
            .with_context(|| format!("Failed to read wordlist {}", path.display()))?,
        None => wordpool::pool_words(),
    };

    let target = if free {
        wordpool::random_target(&words)
    } else {
        wordpool::daily_target(&words, Local::now().date_naive())
    };
    let Some(target) = target else {
        bail!("Word pool is empty; nothing to play");
    };

    let mode = if unlimited {
        GameMode::Unlimited
    } else {
        GameMode::Limited
    };

    let app = App::new(GameSession::new(target, mode), words, free);
    let app = run_tui(app)?;

    // Leave the last board on the screen after the TUI closes
    output::print_game_recap(&app.session);
    Ok(())
}
