//! # reportfs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Primary interface for filesystem work in reportfs.
//!
//! - **`io`**: Plain whole-file reads and writes, parent directory creation, quiet deletion.
//! - **`compressed`**: `FileHelper`, which layers transparent `.gz` handling, appends and
//!   line splitting on top of `io`.
//!
//! ```rust,ignore
//! use crate::common::fs::FileHelper;
//!
//! let helper = FileHelper::new();
//! helper.write_bytes(Path::new("/tmp/x.gz"), &[0x41, 0x42, 0x43])?;
//! assert_eq!(helper.read_bytes(Path::new("/tmp/x.gz"))?, b"ABC");
//! ```
//!

/// Gzip-aware reads, writes, appends and line splitting.
pub mod compressed;
/// Basic file I/O operations.
pub mod io;

pub use compressed::{FileHelper, GZIP_SUFFIX};
