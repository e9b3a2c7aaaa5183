//! Flat-file entry store
//!
//! Records persist as a CSV file with a header row, columns
//! `timestamp,entry,verse_ref,verse_text`. The store is append-only from the
//! caller's view, but each append rewrites the whole file so the timestamp
//! formatting stays normalized. There is no locking: a single writer is
//! assumed, and two concurrent appends can lose one of them.

use super::record::GratitudeRecord;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Header row of the persisted file
pub const HEADER: &str = "timestamp,entry,verse_ref,verse_text";

/// Error type for an unreadable or unwritable store
#[derive(Debug)]
pub struct StoreError {
    path: PathBuf,
    source: io::Error,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry store unavailable at {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Append-only store of gratitude records backed by a CSV file
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Open a store at `path`
    ///
    /// The file is not touched until the first load or append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every persisted record, oldest first
    ///
    /// A missing file is created with a header-only row and loads as empty.
    /// Rows with an unparseable timestamp load with `timestamp: None`; rows
    /// with fewer than four columns are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file cannot be read or bootstrapped.
    pub fn load(&self) -> Result<Vec<GratitudeRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.write_all(&[])?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        let rows = parse_rows(&content);
        let records = rows
            .into_iter()
            .skip(1) // header
            .filter(|row| row.len() >= 4)
            .map(|mut row| {
                let verse_text = row.swap_remove(3);
                let verse_ref = row.swap_remove(2);
                let entry = row.swap_remove(1);
                let timestamp = GratitudeRecord::parse_timestamp(&row[0]);
                GratitudeRecord {
                    timestamp,
                    entry,
                    verse_ref,
                    verse_text,
                }
            })
            .collect();

        Ok(records)
    }

    /// Append one record
    ///
    /// Loads the current set, adds the record, and rewrites the entire file
    /// with normalized timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file cannot be read or written. The
    /// record is not persisted in that case.
    pub fn append(&self, record: GratitudeRecord) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.push(record);
        self.write_all(&records)
    }

    fn write_all(&self, records: &[GratitudeRecord]) -> Result<(), StoreError> {
        let mut out = String::from(HEADER);
        out.push('\n');

        for record in records {
            let row = [
                record.format_timestamp(),
                record.entry.clone(),
                record.verse_ref.clone(),
                record.verse_text.clone(),
            ];
            out.push_str(&encode_row(&row));
            out.push('\n');
        }

        fs::write(&self.path, out).map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, source: io::Error) -> StoreError {
        StoreError {
            path: self.path.clone(),
            source,
        }
    }
}

/// Encode one CSV row, quoting fields that need it
fn encode_row(fields: &[String]) -> String {
    let encoded: Vec<String> = fields.iter().map(|f| encode_field(f)).collect();
    encoded.join(",")
}

/// Quote a field when it contains a comma, quote, or line break
fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parse CSV content into rows of fields
///
/// Handles quoted fields, doubled quotes inside them, and line breaks within
/// quoted fields. Entries written by this store (or by the original pandas
/// writer) all fall inside this subset.
fn parse_rows(input: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {
                    // Swallowed; the matching '\n' terminates the row
                }
                _ => field.push(c),
            }
        }
    }

    // Final row without a trailing newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
