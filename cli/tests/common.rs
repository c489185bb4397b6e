//! # reportfs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Every command runs inside a
//! temporary working directory with an explicit, empty configuration file so
//! user and project configuration on the host cannot leak into the tests.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory plus the config file commands run with.
pub struct Sandbox {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Sandbox {
    /// Creates a sandbox whose configuration file holds `config_toml`.
    pub fn with_config(config_toml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = dir.path().join("reportfs.toml");
        fs::write(&config, config_toml).expect("Failed to write test config");
        Self { dir, config }
    }

    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `reportfs` bound to this sandbox's directory and config.
    pub fn cmd(&self) -> Command {
        let mut cmd = reportfs_cmd();
        cmd.current_dir(self.dir.path())
            .env("REPORTFS_CONFIG", &self.config)
            .env_remove("REPORTFS_RESOURCE_DIR")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// `assert_cmd::Command` pointing at the compiled `reportfs` binary.
pub fn reportfs_cmd() -> Command {
    Command::cargo_bin("reportfs").expect("Failed to find reportfs binary for testing")
}
