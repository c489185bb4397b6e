//! # Report Data Model (`report::dataset`)
//!
//! File: cli/src/report/dataset.rs
//!
//! ## Overview
//!
//! The tabular data handed to renderers:
//! - `Cell`: one value (text, integer, float, boolean or empty).
//! - `DataSet`: ordered column names plus rows of cells, every row as wide as the header.
//! - `ReportData`: the labelled datasets of one report run, a generation timestamp,
//!   and free-form string parameters.
//!
//! Datasets load from TOML:
//!
//! ```toml
//! columns = ["clinic", "visits", "rate"]
//! rows = [
//!     ["North", 12, 0.5],
//!     ["South", 7, 0.25],
//! ]
//! ```
//!
use crate::common::fs::FileHelper;
use crate::core::error::{ReportFsError, Result};
use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// A single value in a dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Boolean(b) => write!(f, "{}", b),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

/// A rectangular table of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSet {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, rejecting it when its width differs from the header.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(anyhow!(ReportFsError::Dataset(format!(
                "row {} has {} cells but there are {} columns",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            ))));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builder-style `push_row` for tests and fixtures.
    pub fn with_row(mut self, row: Vec<Cell>) -> Result<Self> {
        self.push_row(row)?;
        Ok(self)
    }

    /// Parses and validates a dataset from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let parsed: DataSet = toml::from_str(source)
            .map_err(|e| anyhow!(ReportFsError::Dataset(e.to_string())))?;
        let mut dataset = DataSet::new(parsed.columns);
        for row in parsed.rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Loads a dataset file, which may itself be gzip-compressed.
    pub fn from_file(path: &Path, helper: &FileHelper) -> Result<Self> {
        let source = helper.read_string(path)?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Everything one renderer invocation sees.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub data_sets: BTreeMap<String, DataSet>,
    pub parameters: BTreeMap<String, String>,
    pub generated_at: DateTime<Utc>,
}

impl Default for ReportData {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportData {
    pub fn new() -> Self {
        Self {
            data_sets: BTreeMap::new(),
            parameters: BTreeMap::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn with_data_set(mut self, label: impl Into<String>, data_set: DataSet) -> Self {
        self.data_sets.insert(label.into(), data_set);
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn data_set(&self, label: &str) -> Option<&DataSet> {
        self.data_sets.get(label)
    }
}
