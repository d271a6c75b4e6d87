//! CLI integration tests
//!
//! These tests run the built binary against fixture files and check its
//! output and exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_diffcheck-cli"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_lines_equal_files_exit_zero() {
    let dir = TempDir::new().unwrap();
    let exp = write(&dir, "exp.txt", "a\nb\n");
    let act = write(&dir, "act.txt", "a\nb\n");

    let output = run(&["lines", arg(&exp), arg(&act)]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_lines_difference_report() {
    let dir = TempDir::new().unwrap();
    let exp = write(&dir, "exp.txt", "1\n2\n");
    let act = write(&dir, "act.txt", "3\n2\n");

    let output = run(&["lines", arg(&exp), arg(&act), "--name", "numbers"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        concat!(
            "Unexpected numbers: both 2 lines\n",
            "  Difference(expected ---  actual +++)\n",
            "    ---   1: \"1\"\n",
            "    +++   1: \"3\"\n",
        )
    );
}

#[test]
fn test_lines_show_matched() {
    let dir = TempDir::new().unwrap();
    let exp = write(&dir, "exp.txt", "same\nold\n");
    let act = write(&dir, "act.txt", "same\nnew\n");

    let output = run(&["lines", arg(&exp), arg(&act), "--show-matched"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("          1: \"same\""), "{}", stdout);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_json_mapping_report() {
    let dir = TempDir::new().unwrap();
    let exp = write(&dir, "exp.json", r#"{"2": 1, "3": 5}"#);
    let act = write(&dir, "act.json", r#"{"1": 2, "3": 4}"#);

    let output = run(&["json", arg(&exp), arg(&act), "--name", "m"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        concat!(
            "Unexpected m: both 2 entries\n",
            "  Difference(expected ---  actual +++)\n",
            "    --- \"2\": \"1\"\n",
            "    --- \"3\": \"5\"\n",
            "    +++ \"3\": \"4\"\n",
            "    +++ \"1\": \"2\"\n",
        )
    );
}

#[test]
fn test_json_format_outputs_outcome() {
    let dir = TempDir::new().unwrap();
    let exp = write(&dir, "exp.json", r#""2""#);
    let act = write(&dir, "act.json", "2");

    let output = run(&["json", arg(&exp), arg(&act), "--format", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["outcome"], "mismatch");
    assert_eq!(outcome["expected_type"], "string");
    assert_eq!(outcome["actual_type"], "int");
}

#[test]
fn test_config_file_wraps_messages() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "diffcheck.toml", "wrap_width = 10\n");
    let exp = write(&dir, "exp.json", "1");
    let act = write(&dir, "act.json", "2");

    let output = run(&["--config", arg(&config), "json", arg(&exp), arg(&act)]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "document is expected to be\n  \"1\"\nbut got\n  \"2\"\n"
    );
}

#[test]
fn test_invalid_json_exits_two() {
    let dir = TempDir::new().unwrap();
    let exp = write(&dir, "exp.json", "{");
    let act = write(&dir, "act.json", "{}");

    let output = run(&["json", arg(&exp), arg(&act)]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: [ERR_SERIALIZATION]"), "{}", stderr);
}

#[test]
fn test_missing_file_exits_two() {
    let dir = TempDir::new().unwrap();
    let act = write(&dir, "act.txt", "x\n");
    let missing = dir.path().join("missing.txt");

    let output = run(&["lines", arg(&missing), arg(&act)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
}

#[test]
fn test_bad_config_exits_two() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "diffcheck.toml", "unknown_key = 1\n");
    let exp = write(&dir, "exp.txt", "x\n");

    let output = run(&["--config", arg(&config), "lines", arg(&exp), arg(&exp)]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIG"));
}
