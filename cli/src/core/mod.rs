//! # reportfs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for reportfs: configuration, error management,
//! and template rendering.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Tera rendering used by the template report renderers
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ReportFsError, Result}; // For error handling
//! use crate::core::templating; // For template rendering
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
