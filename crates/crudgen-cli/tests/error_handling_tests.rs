//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn crudgen(temp: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("crudgen");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("CRUDGEN_DEFAULTS__ON_EXISTING");
    cmd
}

#[test]
fn test_error_invalid_resource_name() {
    let temp = TempDir::new().unwrap();

    for name in ["../escape", "Rate Card", "a/b"] {
        crudgen(&temp)
            .args(["new", name])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid resource name"))
            .stderr(predicate::str::contains("Suggestions:"));
    }

    // nothing escaped the working directory
    assert!(!temp.path().parent().unwrap().join("escape").exists());
}

#[test]
fn test_error_empty_name_from_stdin() {
    let temp = TempDir::new().unwrap();

    crudgen(&temp)
        .arg("new")
        .write_stdin("\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn test_error_closed_stdin_cancels() {
    let temp = TempDir::new().unwrap();

    crudgen(&temp)
        .arg("new")
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));
}

#[test]
fn test_error_unknown_artifact_kind() {
    let temp = TempDir::new().unwrap();

    crudgen(&temp)
        .args(["render", "Rate", "list-handler"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("add-handler"));
}

#[test]
fn test_error_missing_config_file() {
    let temp = TempDir::new().unwrap();

    crudgen(&temp)
        .args(["--config", "absent.toml", "plan", "Rate"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_error_bad_policy_in_environment() {
    let temp = TempDir::new().unwrap();

    crudgen(&temp)
        .env("CRUDGEN_DEFAULTS__ON_EXISTING", "sometimes")
        .args(["new", "Rate"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("defaults.on_existing"));

    assert!(!temp.path().join("Rate").exists());
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    crudgen(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_error_shows_cause() {
    let temp = TempDir::new().unwrap();

    crudgen(&temp)
        .env("CRUDGEN_DEFAULTS__ON_EXISTING", "sometimes")
        .args(["-v", "new", "Rate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caused by"))
        .stderr(predicate::str::contains("--verbose").not());
}
