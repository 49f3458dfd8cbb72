//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("chatmark")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chatmark is a CLI"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("chatmark")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("chatmark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("chatmark")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_annotate_help() {
    cargo_bin_cmd!("chatmark")
        .args(["annotate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annotate a chat message"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("chatmark")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("span tree"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("chatmark")
        .args(["annotate", "does-not-exist.txt"])
        .assert()
        .failure();
}
