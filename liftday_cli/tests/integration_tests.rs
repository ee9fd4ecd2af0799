//! Integration tests for the liftday binary.
//!
//! These tests drive the session loop through scripted command files and
//! verify the schedule, catalog and profile views.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("liftday"))
}

/// Write a session script to a temp file and return its path
fn script(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = dir.path().join("session.txt");
    fs::write(&path, lines.join("\n")).expect("write script");
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Weekly workout schedule and session tracker",
        ));
}

#[test]
fn test_week_shows_seven_days() {
    let assert = cli().arg("week").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for day in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        assert!(output.contains(day), "missing {} in:\n{}", day, output);
    }
    assert!(output.contains("Upper Body Push"));
    assert!(output.contains("Rest Day"));
}

#[test]
fn test_week_accepts_negative_offset() {
    cli()
        .args(["week", "--offset", "-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Week:"));
}

#[test]
fn test_workouts_lists_catalog() {
    let assert = cli().arg("workouts").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for id in ["upper-push", "lower-body", "upper-pull", "full-body", "rest-day"] {
        assert!(output.contains(id), "missing {} in:\n{}", id, output);
    }
}

#[test]
fn test_workouts_json_is_parseable() {
    let assert = cli().args(["workouts", "--json"]).assert().success();
    let output = assert.get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let workouts = parsed.as_array().expect("array of workouts");
    assert_eq!(workouts.len(), 5);
    assert_eq!(workouts[0]["id"], "upper-push");
}

#[test]
fn test_profile_shows_formatted_height() {
    cli()
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Peter"))
        .stdout(predicate::str::contains("6'0\""))
        .stdout(predicate::str::contains("180lb"));
}

#[test]
fn test_profile_respects_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[user]\nname = \"Alex\"\nheight = 70\n").unwrap();

    cli()
        .args(["--config"])
        .arg(&config)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex"))
        .stdout(predicate::str::contains("5'10\""));
}

#[test]
fn test_start_unknown_workout_fails() {
    cli()
        .args(["start", "--workout", "leg-day-9000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown workout"));
}

#[test]
fn test_quit_pauses_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, &["quit"]);

    cli()
        .args(["start", "--workout", "upper-push", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Upper Body Push"))
        .stdout(predicate::str::contains("Session paused"));
}

#[test]
fn test_completing_a_set_starts_rest_countdown() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, &["done 1", "quit"]);

    cli()
        .args(["start", "--workout", "upper-push", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest:  1:00"));
}

#[test]
fn test_timer_ticks_down_and_stops() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, &["timer 5", "tick 2", "tick 3", "quit"]);

    let assert = cli()
        .args(["start", "--workout", "upper-push", "--script"])
        .arg(&path)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.contains("Timer: 0:05"), "start value:\n{}", output);
    assert!(output.contains("Timer: 0:03"), "after 2 ticks:\n{}", output);
    // After 5 ticks the countdown stopped itself and is no longer shown
    assert!(!output.contains("Timer: 0:00"), "should not linger:\n{}", output);
}

#[test]
fn test_finish_refused_before_last_exercise() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, &["done 1", "finish", "quit"]);

    cli()
        .args(["start", "--workout", "upper-push", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("only available on the last exercise"))
        .stdout(predicate::str::contains("Session paused"));
}

#[test]
fn test_full_scripted_session_finishes() {
    // Set counts of the seven upper-push exercises, in order
    let set_counts = [1, 3, 2, 3, 3, 2, 2];

    let mut lines: Vec<String> = Vec::new();
    for (i, count) in set_counts.iter().enumerate() {
        for set in 1..=*count {
            lines.push(format!("done {}", set));
        }
        if i + 1 < set_counts.len() {
            lines.push("next".into());
        }
    }
    lines.push("finish".into());
    lines.push("y".into());

    let dir = tempfile::tempdir().unwrap();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let path = script(&dir, &refs);

    cli()
        .args(["start", "--workout", "upper-push", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise 7/7"))
        .stdout(predicate::str::contains("Workout complete"));
}

#[test]
fn test_finish_declined_leaves_session_open() {
    let set_counts = [1, 3, 2, 3, 3, 2, 2];

    let mut lines: Vec<String> = Vec::new();
    for (i, count) in set_counts.iter().enumerate() {
        for set in 1..=*count {
            lines.push(format!("done {}", set));
        }
        if i + 1 < set_counts.len() {
            lines.push("next".into());
        }
    }
    lines.push("finish".into());
    lines.push("n".into());
    lines.push("quit".into());

    let dir = tempfile::tempdir().unwrap();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let path = script(&dir, &refs);

    cli()
        .args(["start", "--workout", "upper-push", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Session paused"));
}

#[test]
fn test_navigation_clamps_at_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = script(&dir, &["prev", "prev", "next", "prev", "quit"]);

    let assert = cli()
        .args(["start", "--workout", "upper-push", "--script"])
        .arg(&path)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // prev at the first exercise is a no-op; next then prev lands back on 1
    assert!(output.contains("Exercise 1/7"));
    assert!(output.contains("Exercise 2/7"));
    assert!(!output.contains("Exercise 3/7"));
}
