//! # reportfs Gzip-Aware File Helper (`common::fs::compressed`)
//!
//! File: cli/src/common/fs/compressed.rs
//!
//! ## Overview
//!
//! `FileHelper` reads and writes report files, transparently gzip-compressing
//! any target whose name ends in `.gz`. It also appends lines to (possibly
//! compressed) files and splits file content into lines.
//!
//! ## Architecture
//!
//! A `.gz` target is handled through its *sibling*: the same path with the
//! `.gz` suffix removed.
//!
//! - **Write**: content goes to the sibling, the sibling is compressed into the
//!   target, and the sibling is deleted.
//! - **Read**: the target is inflated into the sibling, the sibling is read, and
//!   the sibling is deleted.
//!
//! Sibling deletion is best-effort and happens on every exit path through
//! `SiblingGuard`. Any other path is read or written directly.
//!
//! Plain I/O failures always propagate. Gzip failures follow the configured
//! `CompressionFailurePolicy`:
//! - `Warn` (default): log `Unable to zip file: ...` at warn level and carry on.
//!   The caller gets `Ok` even though the target may be stale, empty or missing.
//!   A read whose inflate step failed finds no sibling and fails on the read.
//! - `Fail`: return `ReportFsError::Compression`.
//!
//! Appending rewrites the whole file (read, concatenate, write), so it costs
//! O(file size) per call and must not race with another writer on the same path.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let helper = FileHelper::from_config(&config);
//! helper.write_string(Path::new("/var/reports/run.log.gz"), "started")?;
//! helper.append_string(Path::new("/var/reports/run.log.gz"), "finished")?;
//! let lines = helper.read_lines(Path::new("/var/reports/run.log.gz"))?; // ["started", "finished"]
//! ```
//!
use crate::common::archive::compression;
use crate::common::fs::io;
use crate::core::config::{CompressionFailurePolicy, Config, LineSeparator};
use crate::core::error::{ReportFsError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, warn};

/// Literal suffix that switches on transparent gzip handling.
pub const GZIP_SUFFIX: &str = ".gz";

/// Reads, writes and appends report files with transparent `.gz` support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHelper {
    level: u32,
    on_failure: CompressionFailurePolicy,
    separator: LineSeparator,
}

impl Default for FileHelper {
    fn default() -> Self {
        Self {
            level: 6,
            on_failure: CompressionFailurePolicy::Warn,
            separator: LineSeparator::Platform,
        }
    }
}

/// Deletes the sibling scratch file when dropped.
struct SiblingGuard(PathBuf);

impl Drop for SiblingGuard {
    fn drop(&mut self) {
        io::delete_quietly(&self.0);
    }
}

impl FileHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            level: config.compression.level,
            on_failure: config.compression.on_failure,
            separator: config.lines.separator,
        }
    }

    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_failure_policy(mut self, policy: CompressionFailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    pub fn with_line_separator(mut self, separator: LineSeparator) -> Self {
        self.separator = separator;
        self
    }

    /// Returns the uncompressed sibling of a `.gz` path, or `None` for any other path.
    ///
    /// `reports/summary.csv.gz` maps to `reports/summary.csv`.
    /// The name need not be UTF-8. A bare `.gz` name has no sibling.
    pub fn sibling_path(path: &Path) -> Option<PathBuf> {
        let name = path.file_name()?;
        if !name.as_encoded_bytes().ends_with(GZIP_SUFFIX.as_bytes()) {
            return None;
        }
        // The suffix is ASCII, so the extension is exactly "gz" here.
        path.extension().map(|_| path.with_extension(""))
    }

    /// True when `path` ends with the literal `.gz` suffix.
    pub fn is_compressed(path: &Path) -> bool {
        Self::sibling_path(path).is_some()
    }

    /// Writes `content` as UTF-8, compressing when `path` ends in `.gz`.
    pub fn write_string(&self, path: &Path, content: &str) -> Result<()> {
        self.write_bytes(path, content.as_bytes())
    }

    /// Writes `bytes` unchanged, compressing when `path` ends in `.gz`.
    pub fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let _span = debug_span!("write", path = %path.display()).entered();
        match Self::sibling_path(path) {
            Some(sibling) => {
                let guard = SiblingGuard(sibling);
                io::write_bytes_to_file(&guard.0, bytes)?;
                self.compress(&guard.0, path)
            }
            None => io::write_bytes_to_file(path, bytes),
        }
    }

    /// Reads the whole file as UTF-8, inflating first when `path` ends in `.gz`.
    pub fn read_string(&self, path: &Path) -> Result<String> {
        let _span = debug_span!("read", path = %path.display()).entered();
        match Self::sibling_path(path) {
            Some(sibling) => {
                let guard = SiblingGuard(sibling);
                self.decompress(path, &guard.0)?;
                io::read_file_to_string(&guard.0)
            }
            None => io::read_file_to_string(path),
        }
    }

    /// Reads the whole file as bytes, inflating first when `path` ends in `.gz`.
    pub fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let _span = debug_span!("read", path = %path.display()).entered();
        match Self::sibling_path(path) {
            Some(sibling) => {
                let guard = SiblingGuard(sibling);
                self.decompress(path, &guard.0)?;
                io::read_file_to_bytes(&guard.0)
            }
            None => io::read_file_to_bytes(path),
        }
    }

    /// Appends `text` as a new last line, creating the file when needed.
    ///
    /// Existing content that cannot be read (missing file, bad gzip, bad UTF-8) is
    /// treated as absent, so the file is rewritten holding only `text`.
    pub fn append_string(&self, path: &Path, text: &str) -> Result<()> {
        let existing = match self.read_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!("No readable content in {}, starting fresh: {:#}", path.display(), e);
                None
            }
        };
        let combined = match existing {
            Some(original) => format!("{}{}{}", original, LineSeparator::platform(), text),
            None => text.to_string(),
        };
        self.write_string(path, &combined)
    }

    /// Reads the file and splits it into lines with `split_lines`.
    pub fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let content = self.read_string(path)?;
        Ok(self.split_lines(&content))
    }

    /// Splits `content` on the configured separator.
    ///
    /// Empty content yields one empty line. Otherwise trailing empty lines are
    /// dropped, so `"a\nb\n"` and `"a\nb"` both give `["a", "b"]`.
    pub fn split_lines(&self, content: &str) -> Vec<String> {
        if content.is_empty() {
            return vec![String::new()];
        }
        let mut lines: Vec<String> = match self.separator {
            LineSeparator::Platform => content
                .split(LineSeparator::platform())
                .map(str::to_string)
                .collect(),
            LineSeparator::Universal => content
                .replace("\r\n", "\n")
                .split(['\n', '\r'])
                .map(str::to_string)
                .collect(),
        };
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    fn compress(&self, in_file: &Path, out_file: &Path) -> Result<()> {
        let outcome = compression::compress_file(in_file, out_file, self.level);
        self.apply_policy(outcome, "zip", in_file)
    }

    fn decompress(&self, in_file: &Path, out_file: &Path) -> Result<()> {
        let outcome = compression::decompress_file(in_file, out_file);
        self.apply_policy(outcome, "unzip", in_file)
    }

    fn apply_policy(
        &self,
        outcome: std::io::Result<()>,
        action: &'static str,
        path: &Path,
    ) -> Result<()> {
        match (outcome, self.on_failure) {
            (Ok(()), _) => Ok(()),
            (Err(e), CompressionFailurePolicy::Warn) => {
                warn!("Unable to {} file: {} ({})", action, path.display(), e);
                Ok(())
            }
            (Err(source), CompressionFailurePolicy::Fail) => Err(ReportFsError::Compression {
                action,
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}
