//! Integration tests for plinth-cli.
//!
//! Everything here runs offline: the catalog-backed paths need a live
//! backend and are covered by unit tests against mocked ports instead.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn plinth() -> Command {
    Command::cargo_bin("plinth").unwrap()
}

fn write_manifest(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("package.json"), content).unwrap();
}

#[test]
fn help_flag() {
    plinth()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("rename"))
        .stdout(predicate::str::contains("set-domain"));
}

#[test]
fn version_flag() {
    plinth()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_bash() {
    plinth()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plinth"));
}

#[test]
fn rename_updates_the_manifest() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp, r#"{ "name": "old-app", "version": "1.0.0" }"#);

    plinth()
        .current_dir(temp.path())
        .args(["rename", "new-app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project name has been successfully changed from old-app to new-app.",
        ));

    let back = fs::read_to_string(temp.path().join("package.json")).unwrap();
    assert!(back.contains("\"new-app\""));
    // unknown fields survive the rewrite
    assert!(back.contains("\"version\""));
}

#[test]
fn rename_to_the_same_name_is_idempotent() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp, r#"{ "name": "app" }"#);

    plinth()
        .current_dir(temp.path())
        .args(["rename", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project names are the same."));
}

#[test]
fn rename_without_manifest_fails_with_read_problem() {
    let temp = TempDir::new().unwrap();

    plinth()
        .current_dir(temp.path())
        .args(["rename", "anything"])
        .assert()
        .failure()
        .code(1)
        // the result table shows the status code next to the message
        .stdout(predicate::str::contains("Status"))
        .stdout(predicate::str::contains(
            "500     Problem with reading package.json",
        ));
}

#[test]
fn set_domain_updates_the_manifest() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp, r#"{ "name": "app" }"#);

    plinth()
        .current_dir(temp.path())
        .args(["set-domain", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Domain name has been changed to example.com successfully",
        ));

    let back = fs::read_to_string(temp.path().join("package.json")).unwrap();
    assert!(back.contains("\"domainName\""));
}

#[test]
fn set_domain_twice_reports_same_domain() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp, r#"{ "name": "app", "domainName": "example.com" }"#);

    plinth()
        .current_dir(temp.path())
        .args(["set-domain", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Domain names are the same."));
}

#[test]
fn init_with_unknown_package_manager_fails() {
    let temp = TempDir::new().unwrap();

    plinth()
        .current_dir(temp.path())
        .args(["init", "my-app", "--blank", "--package-manager", "pnpm"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Unknown package manager 'pnpm'"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    plinth().arg("bogus").assert().failure().code(2);
}
