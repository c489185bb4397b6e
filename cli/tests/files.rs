//! # reportfs CLI File Command Integration Tests
//!
//! File: cli/tests/files.rs
//!
//! ## Overview
//!
//! Drives `write`, `read`, `append` and `lines` through the binary, with and
//! without the `.gz` suffix.
//!

mod common;
use common::*;
use predicates::prelude::*;
use reportfs::core::config::LineSeparator;
use std::fs;

#[test]
fn test_write_then_read_plain() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["write", "notes.txt", "--text", "quarterly totals"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(sandbox.path("notes.txt")).unwrap(),
        "quarterly totals"
    );
    sandbox
        .cmd()
        .args(["read", "notes.txt"])
        .assert()
        .success()
        .stdout("quarterly totals");
}

#[test]
fn test_write_gz_from_stdin_then_read_bytes() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["write", "x.gz"])
        .write_stdin(vec![0x41u8, 0x42, 0x43])
        .assert()
        .success();

    let on_disk = fs::read(sandbox.path("x.gz")).unwrap();
    assert_eq!(&on_disk[..2], &[0x1f, 0x8b]);
    assert!(!sandbox.path("x").exists());

    sandbox
        .cmd()
        .args(["read", "--bytes", "x.gz"])
        .assert()
        .success()
        .stdout(&b"ABC"[..]);
    assert!(!sandbox.path("x").exists());
}

#[test]
fn test_read_missing_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["read", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to read file"));
}

#[test]
fn test_append_and_lines_on_gz() {
    let sandbox = Sandbox::new();
    for entry in ["export started", "42 rows", "export finished"] {
        sandbox
            .cmd()
            .args(["append", "run.log.gz", entry])
            .assert()
            .success();
    }
    assert!(!sandbox.path("run.log").exists());

    sandbox
        .cmd()
        .args(["lines", "run.log.gz"])
        .assert()
        .success()
        .stdout("export started\n42 rows\nexport finished\n");

    sandbox
        .cmd()
        .args(["read", "run.log.gz"])
        .assert()
        .success()
        .stdout(
            ["export started", "42 rows", "export finished"].join(LineSeparator::platform()),
        );
}

#[test]
fn test_corrupt_archive_warns_then_read_fails() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.path("broken.gz"), "not gzip").unwrap();
    sandbox
        .cmd()
        .args(["read", "broken.gz"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Unable to unzip file")
                .and(predicate::str::contains("Error: Failed to read file")),
        );
    assert!(!sandbox.path("broken").exists());
}

#[test]
fn test_append_to_corrupt_archive_starts_fresh() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.path("broken.gz"), "not gzip").unwrap();
    sandbox
        .cmd()
        .args(["append", "broken.gz", "fresh"])
        .assert()
        .success();
    sandbox
        .cmd()
        .args(["read", "broken.gz"])
        .assert()
        .success()
        .stdout("fresh");
}

#[test]
fn test_corrupt_archive_fails_under_fail_policy() {
    let sandbox = Sandbox::with_config("[compression]\non_failure = \"fail\"\n");
    fs::write(sandbox.path("broken.gz"), "not gzip").unwrap();
    sandbox
        .cmd()
        .args(["read", "broken.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to unzip file"));
    assert!(!sandbox.path("broken").exists());
}

#[test]
fn test_universal_lines_from_config() {
    let sandbox = Sandbox::with_config("[lines]\nseparator = \"universal\"\n");
    fs::write(sandbox.path("mixed.txt"), "a\r\nb\rc\n").unwrap();
    sandbox
        .cmd()
        .args(["lines", "--numbered", "mixed.txt"])
        .assert()
        .success()
        .stdout("     1  a\n     2  b\n     3  c\n");
}
