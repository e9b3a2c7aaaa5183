//! Gratitude journal: records, the flat-file store, and streaks

mod record;
mod store;
mod streak;

pub use record::{EntryError, GratitudeRecord, TIMESTAMP_FORMAT};
pub use store::{EntryStore, HEADER, StoreError};
pub use streak::{Badge, current_streak};
