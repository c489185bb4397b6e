//! # reportfs CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behaviour of the `reportfs` binary: standard flags, error
//! reporting, and configuration handling.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    reportfs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("append").and(predicate::str::contains("render")));
}

#[test]
fn test_version_flag() {
    reportfs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    reportfs_cmd().assert().failure();
}

#[test]
fn test_invalid_config_is_reported() {
    let sandbox = Sandbox::with_config("[compression]\nlevel = 42\n");
    sandbox
        .cmd()
        .args(["read", "anything.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_unknown_config_field_is_reported() {
    let sandbox = Sandbox::with_config("[compression]\nsuffix = \".bz2\"\n");
    sandbox
        .cmd()
        .args(["read", "anything.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}
