//! Annotate subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_annotate_stdin() {
    cargo_bin_cmd!("chatmark")
        .arg("annotate")
        .write_stdin("**oi** tudo bem?")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"kind":"Bold","payload":"oi","start":0,"end":6}"#,
        ))
        .stdout(predicate::str::contains(r#""payload":" tudo bem?""#));
}

#[test]
fn test_annotate_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    fs::write(&test_file, "veja www.example.com").unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["annotate", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""href":"https://www.example.com""#,
        ));
}

#[test]
fn test_annotate_output_is_valid_json() {
    let output = cargo_bin_cmd!("chatmark")
        .arg("annotate")
        .write_stdin("*Nome:** João\n- item")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0][0]["kind"], "ListBold");
    assert_eq!(lines[0][0]["payload"]["label"], "Nome");
    assert_eq!(lines[1][0]["kind"], "ListMarker");
}

#[test]
fn test_annotate_pretty_flag() {
    cargo_bin_cmd!("chatmark")
        .args(["annotate", "--pretty"])
        .write_stdin("_x_")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "Italic""#));
}

#[test]
fn test_annotate_pretty_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    fs::write(&test_file, "_x_").unwrap();
    fs::write(
        temp_dir.path().join(".chatmark.toml"),
        "[output]\npretty = true\n",
    )
    .unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["annotate", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "Italic""#));
}

#[test]
fn test_annotate_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&test_file, "www.a.b").unwrap();
    fs::write(&config_file, "[links]\ndefault_scheme = \"http://\"\n").unwrap();

    cargo_bin_cmd!("chatmark")
        .args([
            "annotate",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""href":"http://www.a.b""#));
}

#[test]
fn test_annotate_invalid_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[links\n").unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["annotate", "--config", config_file.to_str().unwrap()])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_annotate_rejects_invalid_utf8() {
    cargo_bin_cmd!("chatmark")
        .arg("annotate")
        .write_stdin(vec![b'o', b'i', 0xff, 0xfe])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn test_annotate_empty_stdin() {
    cargo_bin_cmd!("chatmark")
        .arg("annotate")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"lines":[[]]}"#));
}
