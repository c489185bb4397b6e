//! # reportfs Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Gzip-aware report file utilities and template-backed report rendering modes.
//! The `reportfs` binary is a thin command-line front-end over these modules.
//!
//! - `core`: configuration, errors, templating
//! - `common`: filesystem and gzip helpers (`FileHelper`)
//! - `report`: datasets, renderers, rendering modes
//! - `commands`: clap subcommands used by the binary
//!
//! ```rust,no_run
//! use reportfs::common::fs::FileHelper;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let helper = FileHelper::new();
//! helper.append_string(Path::new("/tmp/export.log.gz"), "export finished")?;
//! for line in helper.read_lines(Path::new("/tmp/export.log.gz"))? {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod report;
