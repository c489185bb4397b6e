//! # reportfs Compression Utilities (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! File-to-file gzip compression and decompression built on `flate2`. These are
//! the primitives behind transparent `.gz` handling in `common::fs::compressed`.
//!
//! ## Architecture
//!
//! - `compress_file`: streams `in_file` through a `GzEncoder` into `out_file`.
//! - `decompress_file`: streams `in_file` through a `GzDecoder` into `out_file`.
//!
//! Both open their input and output handles inside the call. The handles are
//! dropped (closed) on every exit path, including early returns through `?`.
//! Failures are returned as plain `std::io::Error`; whether a failure is fatal
//! is decided by the caller's `CompressionFailurePolicy`.
//!
//! `decompress_file` pulls the first inflated chunk before creating `out_file`,
//! so input with a missing or corrupt gzip header never creates `out_file`.
//! A failure later in the stream may leave a truncated `out_file` behind.
//!
//! ## Usage
//!
//! ```rust,ignore
//! compression::compress_file(Path::new("report.csv"), Path::new("report.csv.gz"), 6)?;
//! compression::decompress_file(Path::new("report.csv.gz"), Path::new("report.csv"))?;
//! ```
//!
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Gzip-compresses `in_file` into `out_file`, replacing any existing `out_file`.
///
/// `level` is clamped by `flate2` semantics: 0 stores, 9 compresses hardest.
pub fn compress_file(in_file: &Path, out_file: &Path, level: u32) -> io::Result<()> {
    let mut input = BufReader::new(File::open(in_file)?);
    let output = BufWriter::new(File::create(out_file)?);
    let mut encoder = GzEncoder::new(output, Compression::new(level));
    let copied = io::copy(&mut input, &mut encoder)?;
    // finish() writes the gzip trailer; flush the buffered file behind it.
    encoder.finish()?.flush()?;
    debug!(
        "Compressed {} bytes from {} into {}",
        copied,
        in_file.display(),
        out_file.display()
    );
    Ok(())
}

/// Inflates the gzip stream in `in_file` into `out_file`, replacing any existing `out_file`.
///
/// A bad header (including an empty `in_file`) fails before `out_file` is touched.
pub fn decompress_file(in_file: &Path, out_file: &Path) -> io::Result<()> {
    let mut decoder = GzDecoder::new(BufReader::new(File::open(in_file)?));
    let mut first = [0u8; 8192];
    let head = decoder.read(&mut first)?;
    let mut output = BufWriter::new(File::create(out_file)?);
    output.write_all(&first[..head])?;
    let copied = head as u64 + io::copy(&mut decoder, &mut output)?;
    output.flush()?;
    debug!(
        "Decompressed {} into {} ({} bytes)",
        in_file.display(),
        out_file.display(),
        copied
    );
    Ok(())
}
