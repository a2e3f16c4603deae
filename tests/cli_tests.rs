use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Home directory holding `.config/sitesearch/config.toml` with `contents`
fn home_with_config(contents: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("sitesearch");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
    home
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Search a website's content through a search backend",
        ))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitesearch"));
}

#[test]
fn test_cli_rejects_malformed_endpoint() {
    cargo_bin_cmd!()
        .args(["--endpoint", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend endpoint"));
}

#[test]
fn test_cli_rejects_non_http_endpoint() {
    cargo_bin_cmd!()
        .args(["--endpoint", "ftp://127.0.0.1:8000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend endpoint"))
        .stderr(predicate::str::contains("unsupported scheme 'ftp'"));
}

#[test]
fn test_cli_rejects_endpoint_from_config() {
    let home = home_with_config("[backend]\nendpoint = \"mailto:someone\"\n");

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend endpoint 'mailto:someone'"));
}

#[test]
fn test_cli_endpoint_flag_checked_before_config() {
    let home = home_with_config("[backend]\nendpoint = \"http://127.0.0.1:8000\"\n");

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .args(["--endpoint", "::nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backend endpoint '::nope'"));
}

#[test]
fn test_cli_unknown_flag() {
    cargo_bin_cmd!()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}
