use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde::Deserialize;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct QueryOut {
    sounds: String,
    period: usize,
    matches: usize,
    forecast: String,
    #[serde(default)]
    swings: Option<u32>,
}

fn query(args: &[&str]) -> std::process::Output {
    Command::cargo_bin("query")
        .expect("binary exists")
        .args(args)
        .output()
        .expect("run query")
}

#[test]
fn unique_match_text_output() {
    let cmd = Command::cargo_bin("query")
        .expect("binary exists")
        .args(["--sounds", "MMMHMMMMMHMMMMHMM"])
        .assert()
        .success();
    cmd.stdout(predicate::str::contains("Matches: 1"))
        .stdout(predicate::str::contains("Swing 18 more times"));
}

#[test]
fn json_output_schema() {
    let out = query(&["--sounds", "MMMHMMMMMHMMMMHMM", "--json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    assert_eq!(stdout.lines().count(), 1, "exactly one JSON object line");

    let parsed: QueryOut = serde_json::from_str(stdout.trim()).expect("json parse");
    assert_eq!(parsed.sounds, "MMMHMMMMMHMMMMHMM");
    assert_eq!(parsed.period, 43534);
    assert_eq!(parsed.matches, 1);
    assert_eq!(parsed.swings, Some(18));
    assert!(parsed.forecast.contains("18"));
}

#[test]
fn json_output_indeterminate_omits_swings() {
    let out = query(&["--sounds", "LLLLLLL", "--json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    let parsed: QueryOut = serde_json::from_str(stdout.trim()).expect("json parse");
    assert_eq!(parsed.matches, 0);
    assert_eq!(parsed.swings, None);
    assert!(serde_json::from_str::<serde_json::Value>(stdout.trim())
        .unwrap()
        .get("swings")
        .is_none());
}

#[test]
fn empty_sequence_matches_whole_orbit() {
    let out = query(&["--json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    let parsed: QueryOut = serde_json::from_str(stdout.trim()).expect("json parse");
    assert_eq!(parsed.matches, parsed.period);
    assert_eq!(parsed.swings, None);
}

#[test]
fn identical_runs_produce_identical_output() {
    let a = query(&["--sounds", "MMMMHL", "--show", "3"]);
    let b = query(&["--sounds", "MMMMHL", "--show", "3"]);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn show_lists_match_registers() {
    let cmd = Command::cargo_bin("query")
        .expect("binary exists")
        .args(["--sounds", "MMMHMMMMMHMMMMHMM", "--show", "5"])
        .assert()
        .success();
    // The unique match sits at position 100.
    cmd.stdout(predicate::str::contains("position 100"));
}

#[test]
fn invalid_sound_character_fails() {
    let out = query(&["--sounds", "MMX"]);
    assert!(!out.status.success());
    let err = String::from_utf8(out.stderr).expect("utf8 stderr");
    assert!(err.contains("unrecognized sound"), "stderr was: {err}");
}

#[test]
fn invalid_table_fails() {
    let out = query(&["--sounds", "M", "--table", "MHL"]);
    assert!(!out.status.success());
}

#[test]
fn custom_table_changes_the_match_set() {
    // With an all-Mid table every value classifies as Mid, so a single M
    // matches every position that has room.
    let out = query(&["--sounds", "M", "--table", "MMMMMMMM", "--json"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    let parsed: QueryOut = serde_json::from_str(stdout.trim()).expect("json parse");
    assert_eq!(parsed.matches, parsed.period - 1);
}
