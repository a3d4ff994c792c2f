//! End-to-end tests for the `repogen` binary.
//!
//! These invoke the actual CLI binary and validate its behavior from a
//! user's perspective. Tests that need a real `bazel` workspace on the host
//! are gated behind the `integration-tests` feature.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Test that --help shows the tool description and flags
#[test]
fn test_help() {
    let mut cmd = cargo_bin_cmd!("repogen");

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate dependency declarations, test suites, and docs",
        ))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--color"))
        .stdout(predicate::str::contains("--log-level"));
}

/// Test that --version reports the binary name
#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("repogen");

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repogen"));
}

/// Test that unknown flags are rejected
#[test]
fn test_rejects_unknown_flag() {
    let mut cmd = cargo_bin_cmd!("repogen");

    cmd.arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

/// Test that --output requires a value
#[test]
fn test_output_flag_requires_value() {
    let mut cmd = cargo_bin_cmd!("repogen");

    cmd.arg("--output").assert().failure();
}

/// Test that a run outside any bazel workspace aborts with a diagnostic
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_generate_outside_workspace_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("repogen");

    // The dependency file is written before the first query runs; the run
    // must still end non-zero once the query backend fails
    cmd.current_dir(temp.path())
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
