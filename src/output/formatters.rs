//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, Word};
use crate::journal::Badge;
use colored::Colorize;

/// Format a scored guess as colored letter cells
#[must_use]
pub fn guess_cells(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.scores())
        .map(|(letter, score)| {
            let cell = format!(" {letter} ");
            match score {
                LetterScore::Exact => cell.black().on_green().bold().to_string(),
                LetterScore::Present => cell.black().on_yellow().bold().to_string(),
                LetterScore::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Streak progress toward the next badge threshold
#[must_use]
pub fn streak_meter(days: u32, width: usize) -> String {
    let goal = next_badge_goal(days);
    create_progress_bar(f64::from(days.min(goal)), f64::from(goal), width)
}

/// The badge threshold a streak is working toward
///
/// A streak past Gold keeps the Gold goal, so the meter reads full.
#[must_use]
pub const fn next_badge_goal(days: u32) -> u32 {
    match days {
        0..3 => 3,
        3..7 => 7,
        _ => 30,
    }
}

/// Emoji for a badge tier
#[must_use]
pub const fn badge_emoji(badge: Badge) -> &'static str {
    match badge {
        Badge::Bronze => "🥉",
        Badge::Silver => "🥈",
        Badge::Gold => "🥇",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(create_progress_bar(0.0, 10.0, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(5.0, 10.0, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(10.0, 10.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        assert_eq!(create_progress_bar(20.0, 10.0, 10), "██████████");
    }

    #[test]
    fn badge_goals_step_through_tiers() {
        assert_eq!(next_badge_goal(0), 3);
        assert_eq!(next_badge_goal(2), 3);
        assert_eq!(next_badge_goal(3), 7);
        assert_eq!(next_badge_goal(6), 7);
        assert_eq!(next_badge_goal(7), 30);
        assert_eq!(next_badge_goal(100), 30);
    }

    #[test]
    fn streak_meter_is_full_past_gold() {
        assert_eq!(streak_meter(45, 10), "██████████");
    }

    #[test]
    fn guess_cells_cover_every_letter() {
        colored::control::set_override(false);
        let word = Word::new("grace").unwrap();
        let feedback = Feedback::score(&word, &word);
        let cells = guess_cells(&word, feedback);
        for letter in ["G", "R", "A", "C", "E"] {
            assert!(cells.contains(letter));
        }
        colored::control::unset_override();
    }
}
