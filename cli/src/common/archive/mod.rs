//! # reportfs Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Organizational unit for compression-related utilities. Currently holds the
//! gzip file-to-file primitives used when a report target ends in `.gz`.
//!
//! - **`compression`**: `compress_file` / `decompress_file` over `flate2`.
//!

pub mod compression;
