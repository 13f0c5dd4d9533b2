//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("WORDLENS_LOG_DIR", std::env::temp_dir().join("wordlens-test-logs"));
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    info_json_with(cmd(), dir)
}

fn info_json_with(mut command: Command, dir: &std::path::Path) -> Value {
    let output = command
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["analysis"]["reading_wpm"], 200);
    assert_eq!(json["config"]["scheduler"]["debounce_ms"], 100);
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".wordlens.toml"), "should report dotfile: {reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("wordlens.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "error");
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_nested_toml_sections() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordlens.toml"),
        "[analysis]\nreading_wpm = 250\nword_cloud_limit = 20\n\n[scheduler]\ndebounce_ms = 50\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["analysis"]["reading_wpm"], 250);
    assert_eq!(json["config"]["analysis"]["word_cloud_limit"], 20);
    // Unset keys keep their defaults.
    assert_eq!(json["config"]["analysis"]["most_used_limit"], 5);
    assert_eq!(json["config"]["scheduler"]["debounce_ms"], 50);
    assert_eq!(json["config"]["scheduler"]["large_debounce_ms"], 500);
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordlens.yaml"),
        "log_level: warn\nanalysis:\n  extreme_text_chars: 80000\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["analysis"]["extreme_text_chars"], 80_000);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordlens.json"),
        r#"{"log_level": "error", "disable_input_limit": true}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".wordlens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug", "closer config should win");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), r#"log_level = "debug""#).unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["log_level"], "error");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "--config path should be reported: {reported}");
}

#[test]
fn env_var_overrides_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), "[analysis]\nreading_wpm = 250\n").unwrap();

    let mut command = cmd();
    command.env("WORDLENS_ANALYSIS__READING_WPM", "300");
    let json = info_json_with(command, tmp.path());

    assert_eq!(json["config"]["analysis"]["reading_wpm"], 300);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordlens.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn zero_reading_speed_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordlens.toml"), "[analysis]\nreading_wpm = 0\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading_wpm"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordlens.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\nanother_unknown = 42\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".wordlens.toml"), r#"log_level = "error""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["log_level"], "info", "boundary stops search");
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".wordlens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["log_level"], "debug");
}
