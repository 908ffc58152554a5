//! Integration tests for the taskroi binary.

use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Runs the binary from an isolated directory so no stray config is found.
fn taskroi(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_taskroi"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_list_json_is_ranked() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(taskroi(&dir).args([
        "list",
        fixture("tasks.json").to_str().unwrap(),
        "--format",
        "json",
    ]));

    let json: Value = serde_json::from_str(&out).expect("Output is not valid JSON");
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Quarterly review",
            "Apple pitch",
            "Zebra campaign",
            "Client call",
            "Backlog grooming",
            "Expense report",
        ]
    );
    assert_eq!(json[0]["roi"], 20.0);
    assert_eq!(json[0]["roiDisplay"], "20.0");
    assert!(json[4]["roi"].is_null());
    assert_eq!(json[5]["roiDisplay"], "N/A");
    assert!(json[5]["revenue"].is_null());
}

#[test]
fn test_list_top_limits_output() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(taskroi(&dir).args([
        "list",
        fixture("tasks.json").to_str().unwrap(),
        "-f",
        "markdown",
        "--top",
        "2",
    ]));
    assert!(out.contains("| 1 | Quarterly review | low | 200 | 10 | 20.0 |"));
    assert!(out.contains("| 2 | Apple pitch | medium | 100 | 10 | 10.0 |"));
    assert!(!out.contains("Zebra campaign"));
}

#[test]
fn test_list_terminal_plain() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(taskroi(&dir).args([
        "list",
        fixture("tasks.json").to_str().unwrap(),
        "--plain",
    ]));
    assert!(out.starts_with("Tasks by ROI"));
    assert!(out.contains("6 tasks, 2 without ROI"));
}

#[test]
fn test_list_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("ranked.json");
    taskroi(&dir)
        .args([
            "list",
            fixture("tasks.json").to_str().unwrap(),
            "--format",
            "json",
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output_path).expect("Failed to read output file");
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[test]
fn test_list_uses_config_label_and_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".taskroi.toml"),
        "[display]\nna_label = \"n/a\"\n\n[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();
    let out = stdout_of(taskroi(&dir).args(["list", fixture("tasks.json").to_str().unwrap()]));
    assert!(out.starts_with("# Tasks by ROI"));
    assert!(out.contains("| n/a |"));
}

#[test]
fn test_list_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let assert = taskroi(&dir)
        .args(["list", "does-not-exist.json"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Failed to load tasks"));
}

#[test]
fn test_roi_command() {
    let dir = TempDir::new().unwrap();
    assert_eq!(stdout_of(taskroi(&dir).args(["roi", "200", "10"])), "20.0\n");
    assert_eq!(stdout_of(taskroi(&dir).args(["roi", "100", "-5"])), "N/A\n");
    assert_eq!(stdout_of(taskroi(&dir).args(["roi", "NaN", "10"])), "N/A\n");
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    taskroi(&dir).arg("init").assert().success();
    assert!(dir.path().join(".taskroi.toml").exists());

    taskroi(&dir).arg("init").assert().failure();
    taskroi(&dir).args(["init", "--force"]).assert().success();
}
