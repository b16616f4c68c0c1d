//! End-to-end tests of the `pagesim` binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;

fn pagesim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagesim"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_table_output() {
    let output = pagesim(&["--pages", "0,1,2,3,0,1,4", "--frames", "3"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Algorithm: FIFO"));
    assert!(stdout.contains("Algorithm: LRU"));
    assert!(!stdout.contains("Algorithm: Optimal"));
    assert!(stdout.contains("Page faults: 7"));
    assert!(stdout.contains("Total faults (Optimal): 5"));
    assert!(stdout.contains("Efficiency (FIFO): 0.00%"));
}

#[test]
fn test_json_output() {
    let output = pagesim(&[
        "--pages", "7,0,1,2,0,3,0,4,2,3,0,3,2", "--frames", "4", "--policy", "optimal", "--format",
        "json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["frames"], 4);
    assert_eq!(json["optimal_faults"], 6);
    assert_eq!(json["runs"][0]["policy"], "optimal");
    assert_eq!(json["runs"].as_array().unwrap().len(), 1);
}

#[test]
fn test_config_file_with_override() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("sim.json");
    fs::write(&config, r#"{ "frames": 1, "format": "json", "parallel": true }"#).unwrap();

    let output = pagesim(&[
        "--pages", "1,2,1", "--frames", "2", "--config", config.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["frames"], 2);
    assert_eq!(json["runs"][0]["marks"], serde_json::json!(["F", "F", "/"]));
}

#[test]
fn test_invalid_page_reported() {
    let output = pagesim(&["--pages", "1,x", "--frames", "3"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: Invalid page 'x' at position 1"));
}

#[test]
fn test_non_positive_frames_rejected() {
    let output = pagesim(&["--pages", "1,2", "--frames", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Frame count must be positive"));
}

#[test]
fn test_pages_required() {
    let output = pagesim(&["--frames", "3"]);
    assert!(!output.status.success());
}
