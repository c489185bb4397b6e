//! # reportfs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared utility modules. Report logic (`report::`) and command
//! handlers (`commands::`) reach the filesystem only through these helpers.
//!
//! - **`archive`**: Gzip file-to-file compression primitives.
//! - **`fs`**: Plain file I/O plus the gzip-aware `FileHelper`.
//!

/// Compression utilities (gzip).
pub mod archive;
/// Filesystem operations (plain and gzip-aware I/O).
pub mod fs;
