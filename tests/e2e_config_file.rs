/// End-to-end tests for config file loading and option merging.
///
/// These tests exercise the flow from a config file on disk through CLI
/// invocation, using `assert_cmd` and `tempfile` for isolated environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CONFIG_FILENAME: &str = "mkpcli.config.yml";

// ============================================================================
// Helper Functions
// ============================================================================

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mkpcli");
    cmd.current_dir(dir.path()).env_remove("MKPCLI_API_TOKEN");
    cmd
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_missing_file() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["products", "list", "--config", "does-not-exist.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_explicit_config_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.yml", "invalid: yaml: [[[broken");

    cmd_in(&dir)
        .args(["products", "list", "-c"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_explicit_config_supplies_token_and_host() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "custom.yml",
        "api_token: config-token\nmarketplace_host: http://127.0.0.1:9\n",
    );

    cmd_in(&dir)
        .args(["products", "get", "--product", "my-product", "--config"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("API token is required").not())
        .stderr(predicate::str::contains(
            "sending the request for product \"my-product\" failed",
        ));
}

// ============================================================================
// Discovered config
// ============================================================================

#[test]
fn test_discovered_config_unknown_field_warning() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, CONFIG_FILENAME, "storage_region: us-east-1\n");

    cmd_in(&dir)
        .args(["products", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Unknown config field 'storage_region' will be ignored",
        ))
        .stderr(predicate::str::contains("API token is required"));
}

#[test]
fn test_discovered_config_zero_max_pages() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, CONFIG_FILENAME, "max_pages: 0\n");

    cmd_in(&dir)
        .args(["products", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("max_pages must be at least 1"));
}

#[test]
fn test_flag_overrides_config_host() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        CONFIG_FILENAME,
        "api_token: config-token\nmarketplace_host: marketplace.invalid\n",
    );

    cmd_in(&dir)
        .args([
            "products",
            "get",
            "--product",
            "my-product",
            "--marketplace-host",
            "http://127.0.0.1:9",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("127.0.0.1:9"));
}

#[test]
fn test_no_config_file_is_fine() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .args(["products", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown config field").not())
        .stderr(predicate::str::contains("API token is required"));
}
