//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("sirocco")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV viewer and plotter"));
}

#[test]
fn nonexistent_path_exits_with_an_error() {
    Command::cargo_bin("sirocco")
        .unwrap()
        .arg("/definitely/not/here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}
