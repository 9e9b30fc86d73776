use assert_cmd::Command;
use predicates::prelude::*;

// The happy path of `dive tutorial` would launch a real browser, so it is
// covered by unit tests against a mock opener instead of being run here.

#[test]
fn test_dive_without_args_shows_help() {
    let mut cmd = Command::cargo_bin("dive").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn test_dive_help_flag() {
    let mut cmd = Command::cargo_bin("dive").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("command-line companion"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("tutorial"));
}

#[test]
fn test_dive_version_flag() {
    let mut cmd = Command::cargo_bin("dive").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dive"));
}

#[test]
fn test_tutorial_help() {
    let mut cmd = Command::cargo_bin("dive").unwrap();
    cmd.arg("tutorial")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tutorial YouTube playlist"));
}

#[test]
fn test_tutorial_rejects_extra_argument() {
    let mut cmd = Command::cargo_bin("dive").unwrap();
    cmd.arg("tutorial")
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_tutorial_rejects_extra_argument_with_quiet() {
    // --quiet is global, so it must not be mistaken for a positional arg
    let mut cmd = Command::cargo_bin("dive").unwrap();
    cmd.arg("--quiet")
        .arg("tutorial")
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("dive").unwrap();
    cmd.arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
