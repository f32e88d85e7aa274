//! CLI integration tests using the real codehop binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    common::TestHome::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-open previously opened"))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_version_command() {
    common::TestHome::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("codehop"));
}

#[test]
fn test_completions_bash() {
    common::TestHome::new()
        .cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("codehop"));
}

#[test]
fn test_completions_unknown_shell() {
    common::TestHome::new()
        .cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_list_empty_history() {
    common::TestHome::new()
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workspaces recorded"));
}

#[test]
fn test_open_empty_history() {
    common::TestHome::new()
        .cmd()
        .args(["open", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workspace history recorded"));
}

#[test]
fn test_explicit_missing_config_is_error() {
    common::TestHome::new()
        .cmd()
        .args(["--config", "/nonexistent/codehop.yaml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_is_error() {
    let home = common::TestHome::new();
    home.write_config("max_entries: [broken\n");
    home.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}
