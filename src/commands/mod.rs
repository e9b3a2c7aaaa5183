//! Command implementations

mod about;
mod checkin;
mod history;
mod play;
mod scramble;
mod streak;
mod verse;

pub use about::run_about;
pub use checkin::run_checkin;
pub use history::run_history;
pub use play::run_play;
pub use scramble::run_scramble;
pub use streak::run_streak;
pub use verse::run_verse;

use crate::catalog::{self, Theme};
use anyhow::{Context, Result};

/// Look up a theme by name, listing the alternatives on failure
fn resolve_theme(name: &str) -> Result<&'static Theme> {
    catalog::find_theme(name).with_context(|| {
        format!(
            "Unknown theme '{name}'. Available themes: {}",
            catalog::theme_names().join(", ")
        )
    })
}
