//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the coderkeys binary
pub fn coderkeys_bin() -> &'static str {
    env!("CARGO_BIN_EXE_coderkeys")
}

/// Isolated config location inside a temp dir. The file is not created.
pub fn temp_config() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    (dir, path)
}

/// Temp config file pre-filled with TOML.
pub fn temp_config_with(contents: &str) -> (TempDir, PathBuf) {
    let (dir, path) = temp_config();
    fs::write(&path, contents).expect("Failed to write config");
    (dir, path)
}

/// Runs the binary against an isolated config file.
pub fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(coderkeys_bin())
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary and parses stdout as JSON, asserting success.
pub fn run_json(config: &Path, args: &[&str]) -> serde_json::Value {
    let output = run(config, args);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {:?} should succeed. stderr: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
