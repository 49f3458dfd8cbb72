//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("chatmark")
        .arg("parse")
        .write_stdin("**a**\n- b")
        .assert()
        .success()
        .stdout(predicate::str::contains("LINE 0"))
        .stdout(predicate::str::contains("BOLD@0..5 \"a\""))
        .stdout(predicate::str::contains("HARD_BREAK"))
        .stdout(predicate::str::contains("LIST_MARKER@0..2"));
}

#[test]
fn test_parse_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    fs::write(&test_file, "[site](http://x.y)").unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "LINE 0\n  LINK@0..18 label=\"site\" href=\"http://x.y\"\n",
        ));
}

#[test]
fn test_parse_single_line_has_no_hard_break() {
    cargo_bin_cmd!("chatmark")
        .arg("parse")
        .write_stdin("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("HARD_BREAK").not());
}
