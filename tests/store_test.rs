//! Integration tests for the flat-file entry store

use chrono::{NaiveDate, NaiveDateTime};
use selah::journal::{EntryStore, GratitudeRecord, HEADER, current_streak};
use std::fs;
use tempfile::TempDir;

fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn record(entry: &str, timestamp: NaiveDateTime) -> GratitudeRecord {
    GratitudeRecord::new(
        entry,
        "Psalm 107:1",
        "Oh give thanks to the LORD, for he is good, for his steadfast love endures forever!",
        timestamp,
    )
    .unwrap()
}

#[test]
fn missing_file_is_bootstrapped_with_a_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gratitude_entries.csv");
    let store = EntryStore::new(&path);

    let records = store.load().unwrap();
    assert!(records.is_empty());

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("{HEADER}\n"));
}

#[test]
fn append_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = EntryStore::new(dir.path().join("entries.csv"));

    store
        .append(record("Thankful for rain", noon(2024, 3, 15)))
        .unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].entry, "Thankful for rain");
    assert_eq!(records[0].verse_ref, "Psalm 107:1");
    assert_eq!(records[0].timestamp, Some(noon(2024, 3, 15)));
}

#[test]
fn appends_accumulate_in_order() {
    let dir = TempDir::new().unwrap();
    let store = EntryStore::new(dir.path().join("entries.csv"));

    store.append(record("first", noon(2024, 3, 13))).unwrap();
    store.append(record("second", noon(2024, 3, 14))).unwrap();
    store.append(record("third", noon(2024, 3, 15))).unwrap();

    let records = store.load().unwrap();
    let entries: Vec<&str> = records.iter().map(|r| r.entry.as_str()).collect();
    assert_eq!(entries, vec!["first", "second", "third"]);
}

#[test]
fn entries_with_commas_quotes_and_newlines_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = EntryStore::new(dir.path().join("entries.csv"));

    let tricky = "Grateful for rain, sun, and \"everything\"\nin between";
    store.append(record(tricky, noon(2024, 3, 15))).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].entry, tricky);
}

#[test]
fn malformed_timestamp_loads_as_none_instead_of_failing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.csv");
    fs::write(
        &path,
        format!("{HEADER}\nnot-a-date,still here,John 14:27,Peace I leave with you\n"),
    )
    .unwrap();

    let store = EntryStore::new(&path);
    let records = store.load().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].timestamp, None);
    assert_eq!(records[0].entry, "still here");
}

#[test]
fn short_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.csv");
    fs::write(
        &path,
        format!("{HEADER}\n2024-03-15 12:00:00,only two\n2024-03-15 13:00:00,ok,ref,text\n"),
    )
    .unwrap();

    let store = EntryStore::new(&path);
    let records = store.load().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].entry, "ok");
}

#[test]
fn append_rewrites_with_normalized_timestamps() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.csv");
    let store = EntryStore::new(&path);

    store.append(record("entry", noon(2024, 3, 15))).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(&format!("{HEADER}\n")));
    assert!(content.contains("2024-03-15 12:00:00"));
}

#[test]
fn unreadable_store_surfaces_an_error() {
    let dir = TempDir::new().unwrap();
    // A directory at the store path cannot be read as a file
    let store = EntryStore::new(dir.path());

    let err = store.load().unwrap_err();
    assert!(err.to_string().contains("entry store unavailable"));
}

#[test]
fn streak_counts_distinct_days_from_the_store() {
    let dir = TempDir::new().unwrap();
    let store = EntryStore::new(dir.path().join("entries.csv"));

    store.append(record("day one", noon(2024, 3, 13))).unwrap();
    store.append(record("day two", noon(2024, 3, 14))).unwrap();
    store.append(record("day three", noon(2024, 3, 15))).unwrap();
    store.append(record("again", noon(2024, 3, 15))).unwrap();

    let records = store.load().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert_eq!(current_streak(&records, today), 3);
}
