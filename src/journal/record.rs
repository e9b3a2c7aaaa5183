//! Gratitude journal records
//!
//! A record pairs the user's free-text entry with the verse that prompted it
//! and the submission time. Records are append-only; nothing ever updates or
//! deletes one.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Timestamp layout used in the persisted file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error type for rejected journal entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    EmptyEntry,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEntry => write!(f, "Please share something you're grateful for"),
        }
    }
}

impl std::error::Error for EntryError {}

/// One recorded gratitude entry
///
/// `timestamp` is `None` when a persisted row carried an unparseable value;
/// such rows are kept rather than dropped, they just don't count toward the
/// streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GratitudeRecord {
    pub timestamp: Option<NaiveDateTime>,
    pub entry: String,
    pub verse_ref: String,
    pub verse_text: String,
}

impl GratitudeRecord {
    /// Create a record from a user submission
    ///
    /// The entry text is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::EmptyEntry`] when the trimmed entry is empty.
    /// No record exists in that case.
    pub fn new(
        entry: &str,
        verse_ref: impl Into<String>,
        verse_text: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Result<Self, EntryError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(EntryError::EmptyEntry);
        }

        Ok(Self {
            timestamp: Some(timestamp),
            entry: entry.to_string(),
            verse_ref: verse_ref.into(),
            verse_text: verse_text.into(),
        })
    }

    /// Parse a persisted timestamp, tolerating malformed values as `None`
    #[must_use]
    pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
    }

    /// Format the timestamp for persistence; empty when invalid
    #[must_use]
    pub fn format_timestamp(&self) -> String {
        self.timestamp
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Calendar date of the entry, when the timestamp is valid
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|t| t.date())
    }
}
