// SPDX-License-Identifier: Apache-2.0

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// A command isolated from the caller's tokens and config.
fn reposcout() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("reposcout");
    cmd.env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env("XDG_CONFIG_HOME", "/nonexistent/reposcout-test")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    reposcout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reposcout"));
}

#[test]
fn test_help_contains_all_commands() {
    reposcout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_completion_bash() {
    reposcout()
        .args(["completion", "generate", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reposcout"));
}

#[test]
fn test_completion_zsh() {
    reposcout()
        .args(["completion", "generate", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compdef").or(predicate::str::contains("zsh")));
}

#[test]
fn test_invalid_command() {
    reposcout()
        .arg("invalidcmd")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_list_invalid_format() {
    reposcout()
        .args(["list", "--output", "xml"])
        .assert()
        .failure()
        .code(predicate::eq(2))
        .stderr(predicate::str::contains("invalid").or(predicate::str::contains("xml")));
}

#[test]
fn test_list_without_token_fails_before_fetching() {
    reposcout()
        .args(["list", "--no-gh"])
        .write_stdin("")
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("personal access token"));
}

#[test]
fn test_open_requires_name() {
    reposcout()
        .arg("open")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_browse_requires_terminal() {
    reposcout()
        .args(["browse", "--no-gh"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

#[test]
fn test_unreachable_api_reports_network_error() {
    reposcout()
        .env("GH_TOKEN", "ghp_test")
        .env("REPOSCOUT_GITHUB__API_BASE", "http://127.0.0.1:1")
        .args(["list", "--no-gh", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("internet connection"));
}
