//! End-to-end tests driving the `tsa` binary.
//!
//! Tests the full pipeline: snapshot on disk → command → stdout / rewritten file.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tsa_binary() -> String {
    env!("CARGO_BIN_EXE_tsa").to_string()
}

/// Runs `tsa` with an isolated home so no user config is picked up.
fn tsa(home: &Path, args: &[&str]) -> Output {
    Command::new(tsa_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TSA_PRECISION")
        .env_remove("TSA_CLEAN_PATTERN")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run tsa")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tsa should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

const WELL: &str = r#"{
  "name": "BH-01",
  "points": [
    {"type": "sample", "time": 0, "value": 1},
    {"type": "sample", "time": 5, "value": 1},
    {"type": "gap"},
    {"type": "sample", "time": 10, "value": 5},
    {"type": "sample", "time": 15, "value": 5}
  ]
}"#;

const FLAT: &str = r#"{
  "name": "flat",
  "interpolation": "piecewise_constant",
  "points": [
    {"type": "sample", "time": 0, "value": 5},
    {"type": "sample", "time": 1, "value": 5},
    {"type": "sample", "time": 2, "value": 5},
    {"type": "sample", "time": 3, "value": 7}
  ]
}"#;

fn write(temp: &TempDir, name: &str, content: &str) -> String {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_stats_json_reports_coverage_and_average() {
    let temp = TempDir::new().unwrap();
    let well = write(&temp, "well.json", WELL);
    let flat = write(&temp, "flat.json", FLAT);

    let out = stdout(&tsa(temp.path(), &["stats", "--json", &well, &flat]));
    let rows: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "BH-01");
    assert_eq!(rows[0]["coverage"], 10.0);
    assert_eq!(rows[0]["average"], 3.0);
    assert_eq!(rows[0]["gaps"], 1);
    // Constant interpolation holds 5 for 2 days and 5 for 1 day.
    assert_eq!(rows[1]["coverage"], 3.0);
    assert_eq!(rows[1]["average"], 5.0);
}

#[test]
fn test_stats_skips_unreadable_files() {
    let temp = TempDir::new().unwrap();
    let well = write(&temp, "well.json", WELL);
    let bad = write(&temp, "bad.json", "{ nope");

    let out = stdout(&tsa(temp.path(), &["stats", &bad, &well]));
    assert_eq!(out, "BH-01: samples=4 gaps=1 coverage=10.0000 d average=3.0000\n");
}

#[test]
fn test_value_at_hit_and_miss() {
    let temp = TempDir::new().unwrap();
    let well = write(&temp, "well.json", WELL);

    let out = stdout(&tsa(temp.path(), &["value-at", &well, "10"]));
    assert_eq!(out, "5.0000\n");

    let miss = tsa(temp.path(), &["value-at", &well, "7.5"]);
    assert!(!miss.status.success());
    assert!(String::from_utf8_lossy(&miss.stderr).contains("no sample stored at time 7.5"));
}

#[test]
fn test_clean_in_place_then_stats() {
    let temp = TempDir::new().unwrap();
    let flat = write(&temp, "flat.json", FLAT);

    let output = tsa(temp.path(), &["clean", "--in-place", &flat]);
    assert!(output.status.success());

    let out = stdout(&tsa(temp.path(), &["values", &flat]));
    assert_eq!(out, "0.0000\t5.0000\n2.0000\t5.0000\n3.0000\t7.0000\n");

    // Second pass is a no-op.
    let before = std::fs::read_to_string(&flat).unwrap();
    let output = tsa(temp.path(), &["clean", "--in-place", &flat]);
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&flat).unwrap(), before);
}

#[test]
fn test_clean_rejects_unknown_pattern() {
    let temp = TempDir::new().unwrap();
    let flat = write(&temp, "flat.json", FLAT);

    let output = tsa(temp.path(), &["clean", "--pattern", "collapseAll", &flat]);
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("unsupported clean pattern: collapseAll")
    );
}

#[test]
fn test_config_file_sets_precision() {
    let temp = TempDir::new().unwrap();
    let well = write(&temp, "well.json", WELL);
    let config = write(&temp, "tsa.toml", "precision = 1\n");

    let out = stdout(&tsa(temp.path(), &["--config", &config, "value-at", &well, "0"]));
    assert_eq!(out, "1.0\n");
}

#[test]
fn test_env_overrides_precision() {
    let temp = TempDir::new().unwrap();
    let well = write(&temp, "well.json", WELL);

    let output = Command::new(tsa_binary())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("TSA_PRECISION", "0")
        .args(["trend", well.as_str()])
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output),
        "trend: not implemented (midpoint 8, average 3)\n"
    );
}
