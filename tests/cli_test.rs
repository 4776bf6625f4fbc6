//! CLI smoke tests for the cardforge binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("cardforge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("cardforge")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cardforge"));
}

#[test]
fn test_generate_without_content_fails() {
    // Rejected before any model client is constructed, so no API key is
    // needed for this path.
    Command::cargo_bin("cardforge")
        .unwrap()
        .args(["generate", "--count", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No content provided"));
}

#[test]
fn test_generate_unsupported_file_type_fails() {
    Command::cargo_bin("cardforge")
        .unwrap()
        .args(["generate", "--file", "notes.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));
}
