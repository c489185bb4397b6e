//! # reportfs Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the plain (uncompressed) filesystem input/output used
//! by the gzip-aware `FileHelper`. It wraps `std::fs` with context-carrying errors
//! and a couple of conveniences the report writers rely on.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing, and rejects paths that exist as something other than a directory.
//! - **`read_file_to_string`** / **`read_file_to_bytes`**: whole-file reads. Text is decoded as UTF-8.
//! - **`write_string_to_file`** / **`write_bytes_to_file`**: whole-file writes that create the parent directory first and overwrite any existing file.
//! - **`delete_quietly`**: best-effort removal; failures are logged at debug level and otherwise ignored.
//!
//! Every error carries the offending path in its context chain. The root cause is
//! the original `std::io::Error`, so callers can still `downcast_ref::<io::Error>()`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! let out = Path::new("./exports/2024/summary.csv");
//! io::write_string_to_file(out, "a,b\n1,2\n")?; // creates ./exports/2024
//! let text = io::read_file_to_string(out)?;
//! io::delete_quietly(out);
//! ```
//!
use crate::core::error::{ReportFsError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory, including
/// any necessary parent directories (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ReportFsError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Reads the entire content of a file into a UTF-8 string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be opened or read, or if its content is not
/// valid UTF-8 (`io::ErrorKind::InvalidData`).
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads the entire content of a file as raw bytes.
pub fn read_file_to_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to `path` as UTF-8, overwriting if it exists.
///
/// The parent directory is created first when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    write_bytes_to_file(path, content.as_bytes())
}

/// Writes raw bytes to `path`, overwriting if it exists.
///
/// The parent directory is created first when missing.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The parent directory cannot be created.
/// - Writing to the file fails (e.g., permissions, disk full).
pub fn write_bytes_to_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("file.txt").parent()` is `Some("")`, the current directory.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Removes a file, ignoring every failure (including "not found").
pub fn delete_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        debug!("Ignoring failure to delete {:?}: {}", path, e);
    }
}
