//! Integration tests for the `lifx-color` binary.
//!
//! Nothing here talks to the real LIFX service: requests that get as far as
//! the network are pointed at a local port with no listener.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const UNREACHABLE: &str = "http://127.0.0.1:1/v1";

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("lifx-color")
}

#[test]
fn cli_help_lists_flags() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--token"))
        .stdout(predicate::str::contains("--color"))
        .stdout(predicate::str::contains("--brightness"))
        .stdout(predicate::str::contains("--group"))
        .stdout(predicate::str::contains("--api-url").not());
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_requires_token() {
    cli()
        .args(["-c", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
}

#[test]
fn cli_requires_color() {
    cli()
        .args(["-t", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--color"));
}

#[test]
fn cli_unreachable_service_exits_nonzero() {
    cli()
        .args(["-t", "abc123", "-c", "#ff0000", "--api-url", UNREACHABLE])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validating color --- {'string': '#ff0000'}"))
        .stderr(predicate::str::starts_with("Error: http error occurred"));
}

#[test]
fn cli_long_flags_and_group_accepted() {
    cli()
        .args([
            "--token",
            "abc123",
            "--color",
            "blue",
            "--brightness",
            "0.5",
            "--group",
            "kitchen",
            "--verbose",
            "--api-url",
            UNREACHABLE,
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("INFO"))
        .stdout(predicate::str::contains("Setting color").not());
}
