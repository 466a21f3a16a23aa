//! Integration tests for the buildorder CLI
//!
//! These tests run the actual binary and verify its output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test, isolated from the caller's environment
fn buildorder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("buildorder").unwrap();
    cmd.env_remove("BUILDORDER_GRAPH")
        .env_remove("BUILDORDER_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn write_manifest(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("targets.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_no_args_prints_sample_order() {
    buildorder_cmd()
        .assert()
        .success()
        .stdout("Build Order:\nA\nB\nC\nD\nE\n");
}

#[test]
fn test_help_flag() {
    buildorder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compute a build order"));
}

#[test]
fn test_resolve_json() {
    buildorder_cmd()
        .args(["resolve", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"A\"").and(predicate::str::starts_with("[")));
}

#[test]
fn test_resolve_manifest_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        &temp_dir,
        r#"
[[target]]
name = "server"
deps = ["proto"]

[[target]]
name = "proto"
"#,
    );

    buildorder_cmd()
        .env("BUILDORDER_GRAPH", &path)
        .arg("resolve")
        .assert()
        .success()
        .stdout("Build Order:\nserver\nproto\n");
}

#[test]
fn test_cycle_fails_without_partial_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        &temp_dir,
        r#"
[[target]]
name = "X"
deps = ["X"]
"#,
    );

    buildorder_cmd()
        .arg("resolve")
        .arg("--graph")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Cyclic dependency detected. Build cannot be resolved.",
        ))
        .stderr(predicate::str::contains("Cycle: X → X"));
}

#[test]
fn test_check_sample_graph() {
    buildorder_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cycles found"));
}

#[test]
fn test_missing_graph_file() {
    buildorder_cmd()
        .args(["check", "--graph", "/no/such/targets.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Graph manifest not found"));
}

#[test]
fn test_version_command() {
    buildorder_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("buildorder "));
}
