//! # reportfs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout reportfs. It provides a
//! consistent approach to error management with detailed error information and
//! context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ReportFsError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - Configuration errors
//! - Filesystem errors
//! - Gzip compression / decompression failures (only surfaced under the `fail` policy)
//! - Resource lookup errors (fatal during rendering-mode resolution)
//! - Rendering and template errors
//! - Dataset parsing errors
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error kind
//! return Err(ReportFsError::Resource(format!("Resource '{}' not found", name)).into());
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Pattern matching on error kinds
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<ReportFsError>(), Some(ReportFsError::Compression { .. })) => {
//!         println!("Archive is damaged");
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for reportfs.
#[derive(Error, Debug)]
pub enum ReportFsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Unable to {action} file: {}", path.display())]
    Compression {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading template from resource '{name}': {reason}")]
    Resource { name: String, reason: String },

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Invalid dataset: {0}")]
    Dataset(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
