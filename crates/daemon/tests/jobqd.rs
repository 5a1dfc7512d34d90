// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box tests for the jobqd binary

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::NamedTempFile;

fn config_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn jobqd() -> Command {
    let mut cmd = Command::cargo_bin("jobqd").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn ids(stats: &Value, key: &str) -> Vec<u64> {
    let mut ids: Vec<u64> = stats[key]
        .as_array()
        .unwrap_or_else(|| panic!("missing {key} in {stats}"))
        .iter()
        .map(|job| job["id"].as_u64().unwrap())
        .collect();
    ids.sort();
    ids
}

fn run_json(config: &NamedTempFile, extra: &[&str]) -> Value {
    let output = jobqd()
        .arg("--config")
        .arg(config.path())
        .arg("--json")
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "jobqd failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn runs_configured_jobs_to_completion() {
    let config = config_file(
        r#"
[workers]
count = 2
poll_interval_ms = 2

[[jobs]]
payload = "a"
duration = 1

[[jobs]]
payload = { n = 2 }

[[jobs]]
payload = 3
"#,
    );

    let stats = run_json(&config, &[]);
    assert_eq!(ids(&stats, "done"), vec![1, 2, 3]);
    assert!(stats["queued"].as_array().unwrap().is_empty());
    assert!(stats["in_progress"].as_array().unwrap().is_empty());
}

#[test]
fn seeded_jobs_run_before_submitted_ones_get_later_ids() {
    let config = config_file(
        r#"
[coordinator]
seed = [{ id = 5, payload = "seeded" }]

[workers]
count = 1
poll_interval_ms = 2

[[jobs]]
payload = "submitted"
"#,
    );

    let stats = run_json(&config, &[]);
    assert_eq!(ids(&stats, "done"), vec![5, 6]);
}

#[test]
fn crashing_workers_still_finish_every_job() {
    let config = config_file(
        r#"
[workers]
count = 3
poll_interval_ms = 2
crash_after = 1

[[jobs]]
payload = 1

[[jobs]]
payload = 2

[[jobs]]
payload = 3

[[jobs]]
payload = 4

[[jobs]]
payload = 5
"#,
    );

    let stats = run_json(&config, &[]);
    assert_eq!(ids(&stats, "done"), vec![1, 2, 3, 4, 5]);
}

#[test]
fn workers_flag_overrides_config() {
    let config = config_file("[[jobs]]\npayload = \"x\"\n");
    let stats = run_json(&config, &["--workers", "1"]);
    assert_eq!(ids(&stats, "done"), vec![1]);
}

#[test]
fn no_config_prints_empty_summary() {
    jobqd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Queued:").and(predicate::str::contains("Done:")));
}

#[test]
fn invalid_config_fails() {
    let config = config_file("[workers]\ncount = 0\n");
    jobqd()
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("workers.count"));
}

#[test]
fn zero_workers_flag_fails() {
    jobqd()
        .args(["--workers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("workers.count"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    jobqd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
