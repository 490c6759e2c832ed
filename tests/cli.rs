//! Integration tests for top-level CLI behavior.

use std::process::Command;

use tempfile::TempDir;

fn run_refdate(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_refdate");
    Command::new(bin)
        .args(args)
        .env_remove("REFDATE_DEFAULT_TIMEOUT")
        .env_remove("REFDATE_LOG")
        .output()
        .expect("failed to run refdate binary")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn now_prints_positive_offset() {
    let output = run_refdate(&["now"]);
    assert!(output.status.success());
    let offset: f64 = stdout_of(&output).parse().expect("offset should be a number");
    assert!(offset > 0.0);
}

#[test]
fn now_unix_is_offset_plus_delta() {
    let output = run_refdate(&["now", "--unix"]);
    assert!(output.status.success());
    let unix: f64 = stdout_of(&output).parse().expect("unix seconds should be a number");
    assert!(unix > 978_307_200.0);
}

#[test]
fn convert_from_unix_epoch() {
    let output = run_refdate(&["convert", "--from-unix", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-978307200");
}

#[test]
fn convert_to_unix_accepts_negative_offset() {
    let output = run_refdate(&["convert", "--to-unix", "-978307200"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0");
}

#[test]
fn diff_prints_difference() {
    let output = run_refdate(&["diff", "10", "-2.5"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "12.5");
}

#[test]
fn advance_moves_backwards() {
    let output = run_refdate(&["advance", "10.5", "-0.5"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "10");
}

#[test]
fn request_describes_file_without_sending() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("req.yaml");
    std::fs::write(&path, "target: http://127.0.0.1:9/never-contacted\ntimeout: 3\n").unwrap();

    let output = run_refdate(&["request", path.to_str().unwrap(), "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["target"], "http://127.0.0.1:9/never-contacted");
    assert_eq!(value["timeout"], 3.0);
    let started = value["started"].as_f64().unwrap();
    let deadline = value["deadline"].as_f64().unwrap();
    assert!((deadline - started - 3.0).abs() < 1e-6);
}

#[test]
fn request_uses_timeout_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("req.yaml");
    std::fs::write(&path, "target: https://example.com/\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_refdate"))
        .args(["request", path.to_str().unwrap(), "--json"])
        .env("REFDATE_DEFAULT_TIMEOUT", "7.5")
        .output()
        .expect("failed to run refdate binary");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["timeout"], 7.5);
}

#[test]
fn malformed_env_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "REFDATE_DEFAULT_TIMEOUT='7.5\n").unwrap();
    std::fs::write(dir.path().join("req.yaml"), "target: https://example.com/\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_refdate"))
        .args(["request", "req.yaml", "--json"])
        .current_dir(dir.path())
        .env_remove("REFDATE_DEFAULT_TIMEOUT")
        .output()
        .expect("failed to run refdate binary");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr.contains(".env"));
}

#[test]
fn env_file_supplies_default_timeout() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "REFDATE_DEFAULT_TIMEOUT=4.5\n").unwrap();
    std::fs::write(dir.path().join("req.yaml"), "target: https://example.com/\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_refdate"))
        .args(["request", "req.yaml", "--json"])
        .current_dir(dir.path())
        .env_remove("REFDATE_DEFAULT_TIMEOUT")
        .output()
        .expect("failed to run refdate binary");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["timeout"], 4.5);
}

#[test]
fn request_with_missing_file_fails() {
    let output = run_refdate(&["request", "/nonexistent/refdate/req.yaml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("failed to read"));
}

#[test]
fn invalid_default_timeout_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_refdate"))
        .args(["now"])
        .env("REFDATE_DEFAULT_TIMEOUT", "forever")
        .output()
        .expect("failed to run refdate binary");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("REFDATE_DEFAULT_TIMEOUT"));
}

#[test]
fn help_exits_successfully() {
    let output = run_refdate(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("convert"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_refdate(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
