//! Streak calculation and achievement badges
//!
//! A streak is the number of consecutive calendar days, ending today, with at
//! least one recorded entry. Badges are derived from the streak on every
//! view; nothing about them is persisted.

use super::record::GratitudeRecord;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::fmt;

/// Count consecutive entry days ending at `today`
///
/// Builds the set of distinct calendar dates among the records, then walks
/// backward from `today` one day at a time until the first missing day.
/// Records with an invalid timestamp don't contribute a date.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use selah::journal::current_streak;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(current_streak(&[], today), 0);
/// ```
#[must_use]
pub fn current_streak(records: &[GratitudeRecord], today: NaiveDate) -> u32 {
    let days: FxHashSet<NaiveDate> = records.iter().filter_map(GratitudeRecord::date).collect();

    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    streak
}

/// Achievement tier for a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Bronze,
    Silver,
    Gold,
}

impl Badge {
    /// Badge earned by a streak of `days`, if any
    ///
    /// Thresholds: 30 days for Gold, 7 for Silver, 3 for Bronze.
    #[must_use]
    pub const fn for_streak(days: u32) -> Option<Self> {
        match days {
            30.. => Some(Self::Gold),
            7.. => Some(Self::Silver),
            3.. => Some(Self::Bronze),
            _ => None,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bronze => write!(f, "Bronze"),
            Self::Silver => write!(f, "Silver"),
            Self::Gold => write!(f, "Gold"),
        }
    }
}
