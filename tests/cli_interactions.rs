//! Binary-level CLI tests

use assert_cmd::Command;
use predicates::prelude::*;

fn nst() -> Command {
    Command::cargo_bin("nst").expect("binary builds")
}

#[test]
fn help_lists_core_flags() {
    nst()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--duration"))
        .stdout(predicate::str::contains("--download-url"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn version_prints_package_version() {
    nst()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn long_version_carries_build_stamp() {
    nst()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("built"));
}

#[test]
fn conflicting_color_flags_are_rejected() {
    nst()
        .args(["--color", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("color"));
}

#[test]
fn zero_duration_is_rejected() {
    nst()
        .args(["--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration"));
}

#[test]
fn invalid_download_url_is_rejected() {
    nst()
        .args(["--download-url", "not a url", "--duration", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL").or(predicate::str::contains("url")));
}

#[test]
fn unknown_flag_fails_with_usage() {
    nst()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage").or(predicate::str::contains("usage")));
}
