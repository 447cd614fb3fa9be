//! Integration tests for the healthlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Entry submission and the rendered recommendation
//! - Delete and edit by listed day
//! - CSV export
//! - Clear with confirmation

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::cargo_bin("healthlog").expect("Failed to find healthlog binary")
}

fn add(data_dir: &Path, sleep: &str, exercise: &str, diet: &str, ethnicity: &str) -> Command {
    let mut cmd = cli();
    cmd.arg("add")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--sleep", sleep, "--exercise", exercise])
        .args(["--diet", diet, "--ethnicity", ethnicity]);
    cmd
}

fn stored_entries(data_dir: &Path) -> Vec<serde_json::Value> {
    let contents =
        fs::read_to_string(data_dir.join("healthData.json")).expect("Failed to read storage");
    serde_json::from_str(&contents).expect("Storage is not a JSON array")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily sleep, exercise and BMI tracker"));
}

#[test]
fn test_add_shows_recommendation_and_persists() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "6", "20", "Vegan", "Asian")
        .args(["--height", "175", "--weight", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Based on today’s input:"))
        .stdout(predicate::str::contains("You need more sleep"))
        .stdout(predicate::str::contains("Aim for at least 30 mins"))
        .stdout(predicate::str::contains("lentils, tofu, beans"))
        .stdout(predicate::str::contains("calcium-rich"))
        .stdout(predicate::str::contains("22.9 (Normal weight)"))
        .stdout(predicate::str::contains("Entry saved"));

    let entries = stored_entries(data_dir);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["bmi"], 22.9);
    assert_eq!(entries[0]["diet"], "vegan");
    assert_eq!(entries[0]["sleepHours"], 6.0);
}

#[test]
fn test_non_numeric_height_leaves_bmi_empty() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "8", "45", "omnivore", "nordic")
        .args(["--height", "tall", "--weight", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your BMI").not())
        .stdout(predicate::str::contains("BMI: N/A"));

    let entries = stored_entries(data_dir);
    assert!(entries[0]["bmi"].is_null());
    assert!(entries[0]["heightCm"].is_null());
}

#[test]
fn test_default_command_lists_entries() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli()
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."))
        .stdout(predicate::str::contains("No data yet."));

    add(data_dir, "6", "20", "vegan", "asian").assert().success();
    add(data_dir, "8", "40", "vegan", "asian").assert().success();

    cli()
        .arg("list")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 2: Sleep 8 hrs, Exercise 40 mins"))
        .stdout(predicate::str::contains("Hours of Sleep"))
        .stdout(predicate::str::contains("Average Sleep (last 7 days): 7.0 hrs"))
        .stdout(predicate::str::contains("Average Exercise (last 7 days): 30.0 mins"))
        .stdout(predicate::str::contains("Based on today’s input").not());
}

#[test]
fn test_delete_shifts_days() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    for sleep in ["5", "6", "7"] {
        add(data_dir, sleep, "30", "vegan", "asian").assert().success();
    }

    cli()
        .arg("delete")
        .arg("1")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted day 1"))
        .stdout(predicate::str::contains("Day 1: Sleep 6 hrs"));

    let entries = stored_entries(data_dir);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["sleepHours"], 6.0);
}

#[test]
fn test_delete_out_of_range_fails_without_change() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "6", "30", "vegan", "asian").assert().success();

    cli()
        .arg("delete")
        .arg("5")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .failure();

    assert_eq!(stored_entries(data_dir).len(), 1);
}

#[test]
fn test_day_zero_is_reported_as_a_day() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "6", "30", "vegan", "asian").assert().success();

    for command in ["delete", "edit"] {
        cli()
            .arg(command)
            .arg("0")
            .arg("--data-dir")
            .arg(data_dir)
            .assert()
            .failure()
            .stderr(predicate::str::contains("DayOutOfRange { day: 0, len: 1 }"));
    }

    assert_eq!(stored_entries(data_dir).len(), 1);
}

#[test]
fn test_non_finite_sleep_is_rejected() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "7", "30", "vegan", "asian").assert().success();
    add(data_dir, "8", "45", "omnivore", "nordic").assert().success();
    let before = stored_entries(data_dir);

    for value in ["NaN", "inf"] {
        add(data_dir, value, "30", "vegan", "asian")
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a finite number"));
    }

    cli()
        .arg("edit")
        .arg("1")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--exercise", "NaN"])
        .assert()
        .failure();

    assert_eq!(stored_entries(data_dir), before);

    cli()
        .arg("list")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 2: Sleep 8 hrs"));
}

#[test]
fn test_edit_moves_entry_to_end() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "5", "30", "vegan", "asian").assert().success();
    add(data_dir, "6", "30", "vegan", "asian").assert().success();

    cli()
        .arg("edit")
        .arg("1")
        .args(["--sleep", "9"])
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Great job on sleep"))
        .stdout(predicate::str::contains("Day 1 updated (now day 2)"));

    let entries = stored_entries(data_dir);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["sleepHours"], 6.0);
    assert_eq!(entries[1]["sleepHours"], 9.0);
    assert_eq!(entries[1]["diet"], "vegan");
}

#[test]
fn test_export_empty_produces_no_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli()
        .arg("export")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to export!"));

    assert!(!data_dir.join("health_data.csv").exists());
}

#[test]
fn test_export_single_entry() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "6", "20", "vegan", "asian")
        .args(["--height", "175", "--weight", "70"])
        .assert()
        .success();

    cli()
        .arg("export")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let csv = fs::read_to_string(data_dir.join("health_data.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Day,Sleep,Exercise,Diet,Ethnicity,Height(cm),Weight(kg),BMI",
            "1,6,20,vegan,asian,175,70,22.9",
        ]
    );
}

#[test]
fn test_export_to_explicit_path() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let output = data_dir.join("out").join("mine.csv");

    add(data_dir, "6", "20", "vegan", "asian").assert().success();

    cli()
        .arg("export")
        .arg("--output")
        .arg(&output)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_clear_declined_keeps_data() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "6", "20", "vegan", "asian").assert().success();

    cli()
        .arg("clear")
        .arg("--data-dir")
        .arg(data_dir)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to clear all data?"))
        .stdout(predicate::str::contains("Nothing cleared."));

    assert_eq!(stored_entries(data_dir).len(), 1);
}

#[test]
fn test_clear_confirmed_removes_storage() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    add(data_dir, "6", "20", "vegan", "asian").assert().success();

    cli()
        .arg("clear")
        .arg("--data-dir")
        .arg(data_dir)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    assert!(!data_dir.join("healthData.json").exists());

    cli()
        .arg("clear")
        .arg("--yes")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}
