//! Binary-level tests for the `microdata-extractor` command.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn extractor() -> Command {
    Command::cargo_bin("microdata-extractor").expect("binary exists")
}

#[test]
fn test_extract_file_to_stdout() {
    extractor()
        .args(["extract", "--file"])
        .arg(fixture("person.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":["Jane Doe"]"#))
        .stderr(predicate::str::contains("1 top-level item(s)"));
}

#[test]
fn test_extract_stdin_yaml() {
    extractor()
        .args(["extract", "--file", "-", "--format", "yaml"])
        .write_stdin(r#"<div itemscope><span itemprop="name">Jane Doe</span></div>"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("items:"))
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn test_extract_to_output_file() {
    let dir = tempdir().expect("temp dir");
    let output = dir.path().join("recipe.json");

    extractor()
        .args(["extract", "--pretty", "--file"])
        .arg(fixture("recipe.html"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("2 top-level item(s)"));

    let written = fs::read_to_string(&output).expect("output written");
    let json: serde_json::Value = serde_json::from_str(&written).expect("valid JSON");
    assert_eq!(json["items"][0]["properties"]["prepTime"][0], "PT15M");
}

#[test]
fn test_missing_source_fails() {
    extractor()
        .arg("extract")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Either a URL or an HTML string must be supplied",
        ));
}

#[test]
fn test_invalid_url_fails() {
    extractor()
        .args(["extract", "--url", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}
