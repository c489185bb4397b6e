//! # Report Helpers (`report::util`)
//!
//! File: cli/src/report/util.rs
//!
use crate::core::error::Result;
use crate::report::csv::CsvReportRenderer;
use crate::report::dataset::{DataSet, ReportData};
use crate::report::renderer::ReportRenderer;
use anyhow::Context;

/// Label a lone dataset is filed under when wrapped into `ReportData`.
pub const DEFAULT_DATA_SET_LABEL: &str = "dataset";

/// Renders a single dataset as CSV text.
///
/// Renderer failures are returned unchanged.
pub fn to_csv(data_set: &DataSet) -> Result<String> {
    let data = ReportData::new().with_data_set(DEFAULT_DATA_SET_LABEL, data_set.clone());
    let mut out = Vec::new();
    CsvReportRenderer::new().render(&data, None, &mut out)?;
    String::from_utf8(out).context("CSV renderer produced invalid UTF-8")
}
