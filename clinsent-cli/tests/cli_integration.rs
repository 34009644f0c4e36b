//! Integration tests for the clinsent CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_process_clinical_note() {
    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process").arg("-i").arg(fixture_path("note.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Patient admis pour fièvre.\n"))
        .stdout(predicate::str::contains(
            "Température à 38 le soir Page 1 sans frissons\n",
        ))
        .stdout(predicate::str::contains("Traitement par paracétamol.\n"));
}

#[test]
fn test_keep_excluded_changes_boundaries() {
    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("note.json"))
        .arg("--keep-excluded");

    // the page header is now evaluated: "Page" follows a newline and is
    // capitalised, so it opens a sentence of its own
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Température à 38 le soir\n"))
        .stdout(predicate::str::contains("Page 1 sans frissons\n"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("batch.json"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"document\": \"first\""))
        .stdout(predicate::str::contains("\"document\": \"batch#1\""))
        .stdout(predicate::str::contains("\"text\": \"leave.\""))
        .stdout(predicate::str::contains("\"start\""));
}

#[test]
fn test_markdown_output() {
    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("batch.json"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## first"))
        .stdout(predicate::str::contains("1. Go."))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences: 4*"));
}

#[test]
fn test_no_check_capitalized() {
    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("batch.json"))
        .arg("-f")
        .arg("markdown")
        .arg("--no-check-capitalized");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*Total sentences: 5*"));
}

#[test]
fn test_glob_pattern_and_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sentences.txt");

    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg("tests/fixtures/*.json")
        .arg("-o")
        .arg(&output)
        .arg("-q");

    cmd.assert().success();

    let written = fs::read_to_string(output).unwrap();
    assert!(written.contains("Go."));
    assert!(written.contains("Traitement par paracétamol."));
}

#[test]
fn test_missing_input_fails() {
    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process").arg("-i").arg("tests/fixtures/*.missing");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_config_file_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("clinsent.toml");
    fs::write(&config, "punct_chars = [\"!\"]\n").unwrap();

    let mut cmd = Command::cargo_bin("clinsent").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("batch.json"))
        .arg("-c")
        .arg(&config)
        .arg("-f")
        .arg("markdown");

    // "." no longer ends a sentence, only the capitalised restart remains
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*Total sentences: 3*"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("clinsent.toml");

    Command::cargo_bin("clinsent")
        .unwrap()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    Command::cargo_bin("clinsent")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Xxxxx"));
}

#[test]
fn test_validate_reports_deprecated_option() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("legacy.toml");
    fs::write(&config, "use_endlines = true\n").unwrap();

    Command::cargo_bin("clinsent")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("use_endlines"));
}

#[test]
fn test_validate_rejects_malformed_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "capitalized_shapes = 3\n").unwrap();

    Command::cargo_bin("clinsent")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
