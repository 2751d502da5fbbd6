//! Integration tests for the splitpal command line interface
//!
//! These exercise the binary end to end with `SPLITPAL_DATA_DIR` pointed
//! at a temporary directory so nothing touches the real config. The TUI
//! subcommand is not tested here since it needs a real terminal.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn splitpal(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("splitpal").unwrap();
    cmd.env("SPLITPAL_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    splitpal(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bill splitting"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn init_writes_default_config() {
    let temp = TempDir::new().unwrap();
    splitpal(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized splitpal"))
        .stdout(predicate::str::contains("Clark"));

    let config_path = temp.path().join("config.json");
    assert!(config_path.exists());

    let contents = std::fs::read_to_string(config_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["currency_symbol"], "€");
    assert_eq!(json["seed_friends"].as_array().unwrap().len(), 3);
}

#[test]
fn init_twice_does_not_overwrite() {
    let temp = TempDir::new().unwrap();
    splitpal(&temp).arg("init").assert().success();

    // Edit the config by hand, then re-run init
    let config_path = temp.path().join("config.json");
    std::fs::write(&config_path, r#"{"currency_symbol": "$"}"#).unwrap();

    splitpal(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let contents = std::fs::read_to_string(config_path).unwrap();
    assert!(contents.contains("$"));
}

#[test]
fn config_shows_paths_and_settings() {
    let temp = TempDir::new().unwrap();
    splitpal(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("splitpal Configuration"))
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Currency symbol: €"))
        .stdout(predicate::str::contains("Seed friends:    3"));
}

#[test]
fn config_reflects_custom_settings() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.json"),
        r#"{"currency_symbol": "$", "seed_friends": []}"#,
    )
    .unwrap();

    splitpal(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"))
        .stdout(predicate::str::contains("Seed friends:    0"));
}

#[test]
fn bad_subcommand_fails() {
    let temp = TempDir::new().unwrap();
    splitpal(&temp)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
