//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn selah() -> Command {
    Command::cargo_bin("selah").unwrap()
}

fn data_file(dir: &TempDir) -> String {
    dir.path()
        .join("gratitude_entries.csv")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn check_in_records_an_entry() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["check-in", "--entry", "Thankful for rain", "--data-file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your gratitude has been recorded"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("Thankful for rain"));
}

#[test]
fn check_in_reads_the_entry_from_stdin() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["check-in", "--data-file", &file])
        .write_stdin("Grateful for my family\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your gratitude has been recorded"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("Grateful for my family"));
}

#[test]
fn empty_check_in_is_rejected_and_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["check-in", "--entry", "   ", "--data-file", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please share something you're grateful for",
        ));

    // Validation runs before the store is touched
    assert!(!std::path::Path::new(&file).exists());
}

#[test]
fn check_in_with_unknown_theme_fails() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["check-in", "--theme", "joy", "--entry", "x", "--data-file", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'joy'"));
}

#[test]
fn history_on_an_empty_journal_says_so() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["history", "--data-file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn history_lists_recorded_entries() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["check-in", "--entry", "Thankful for rain", "--data-file", &file])
        .assert()
        .success();

    selah()
        .args(["history", "--data-file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thankful for rain"));
}

#[test]
fn streak_counts_todays_check_in() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["check-in", "--entry", "Thankful", "--data-file", &file])
        .assert()
        .success();

    selah()
        .args(["streak", "--data-file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 1 day"));
}

#[test]
fn streak_on_an_empty_journal_is_zero() {
    let dir = TempDir::new().unwrap();
    let file = data_file(&dir);

    selah()
        .args(["streak", "--data-file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 0 days"));
}

#[test]
fn verse_prints_a_reference_for_the_theme() {
    selah()
        .args(["verse", "--theme", "strength"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Philippians 4:13").or(predicate::str::contains("Isaiah 40:31")),
        );
}

#[test]
fn about_describes_the_app() {
    selah()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record gratitude entries"));
}

#[test]
fn verse_with_unknown_theme_fails() {
    selah()
        .args(["verse", "--theme", "despair"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available themes"));
}
