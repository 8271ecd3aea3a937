//! Integration tests for the linestash CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn linestash() -> Command {
    let mut cmd = Command::cargo_bin("linestash").unwrap();
    cmd.env_remove("LINESTASH_CHUNK_SIZE");
    cmd
}

#[test]
fn test_read_single_file() {
    linestash()
        .arg("read")
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout("first line\nsecond line\nthird line without newline\n");
}

#[test]
fn test_read_with_tiny_chunks() {
    linestash()
        .args(["read", "--chunk-size", "1"])
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout("first line\nsecond line\nthird line without newline\n");
}

#[test]
fn test_chunk_size_from_env() {
    linestash()
        .env("LINESTASH_CHUNK_SIZE", "3")
        .arg("read")
        .arg(fixture_path("numbers.txt"))
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

#[test]
fn test_read_multiple_files_in_order() {
    linestash()
        .arg("read")
        .arg(fixture_path("numbers.txt"))
        .arg(fixture_path("sample.txt"))
        .assert()
        .success()
        .stdout("one\ntwo\nfirst line\nsecond line\nthird line without newline\n");
}

#[test]
fn test_interleave_with_prefix() {
    let numbers = fixture_path("numbers.txt");
    let sample = fixture_path("sample.txt");

    let expected = [
        format!("{numbers}:one\n"),
        format!("{sample}:first line\n"),
        format!("{numbers}:two\n"),
        format!("{sample}:second line\n"),
        format!("{sample}:third line without newline\n"),
    ]
    .concat();

    linestash()
        .args(["read", "--interleave", "--prefix", "-c", "4"])
        .arg(&numbers)
        .arg(&sample)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_empty_file_prints_nothing() {
    linestash()
        .arg("read")
        .arg(fixture_path("empty.txt"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_json_output() {
    let output = linestash()
        .args(["read", "-f", "json"])
        .arg(fixture_path("sample.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = parsed.as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["text"], "first line");
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[0]["terminated"], true);
    assert_eq!(lines[2]["text"], "third line without newline");
    assert_eq!(lines[2]["terminated"], false);
}

#[test]
fn test_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.log"), "b\n").unwrap();
    fs::write(temp_dir.path().join("a.log"), "a\n").unwrap();
    fs::write(temp_dir.path().join("skip.txt"), "skip\n").unwrap();

    linestash()
        .arg("read")
        .arg(temp_dir.path().join("*.log").to_string_lossy().into_owned())
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_stdin_input() {
    linestash()
        .args(["read", "-c", "2", "-"])
        .write_stdin("piped\ninput")
        .assert()
        .success()
        .stdout("piped\ninput\n");
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("linestash.toml");
    fs::write(
        &config,
        "[reader]\nchunk_size = 2\n[output]\nformat = \"text\"\nprefix = true\n",
    )
    .unwrap();

    linestash()
        .arg("read")
        .arg("--config")
        .arg(&config)
        .arg(fixture_path("numbers.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "{}:one\n",
            fixture_path("numbers.txt")
        )));
}

#[test]
fn test_zero_chunk_size_fails() {
    linestash()
        .args(["read", "--chunk-size", "0"])
        .arg(fixture_path("numbers.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk size must be greater than zero"));
}

#[test]
fn test_nonexistent_file() {
    linestash()
        .arg("read")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found matching"));
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("generated.toml");

    linestash()
        .arg("generate-config")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("chunk_size = 1024"));

    linestash()
        .arg("read")
        .arg("--config")
        .arg(&output)
        .arg(fixture_path("numbers.txt"))
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

#[test]
fn test_read_requires_input() {
    linestash()
        .arg("read")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILE/PATTERN"));
}
