//! # CSV Renderer (`report::csv`)
//!
//! File: cli/src/report/csv.rs
//!
//! Writes every dataset in a `ReportData` as comma-separated text: a header
//! row, then one record per row, each terminated by `\n`. Datasets are written
//! in label order with one blank line between them.
//!
//! Fields containing `,`, `"`, `\r` or `\n` are wrapped in double quotes and
//! embedded quotes are doubled. Empty cells become empty fields.
//!
use crate::core::error::Result;
use crate::report::content_type::ContentType;
use crate::report::dataset::{Cell, DataSet, ReportData};
use crate::report::renderer::{RendererKind, ReportRenderer};
use anyhow::Context;
use std::borrow::Cow;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CsvReportRenderer;

impl CsvReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_record<'a, I>(out: &mut dyn Write, fields: I) -> std::io::Result<()>
where
    I: IntoIterator<Item = Cow<'a, str>>,
{
    let mut first = true;
    for field in fields {
        if !first {
            out.write_all(b",")?;
        }
        out.write_all(escape(&field).as_bytes())?;
        first = false;
    }
    out.write_all(b"\n")
}

fn write_data_set(out: &mut dyn Write, data_set: &DataSet) -> std::io::Result<()> {
    write_record(out, data_set.columns.iter().map(|c| Cow::Borrowed(c.as_str())))?;
    for row in &data_set.rows {
        write_record(
            out,
            row.iter().map(|cell| match cell {
                Cell::Text(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            }),
        )?;
    }
    Ok(())
}

impl ReportRenderer for CsvReportRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Csv
    }

    fn content_type(&self) -> &str {
        ContentType::Csv.mime()
    }

    fn render(&self, data: &ReportData, _argument: Option<&str>, out: &mut dyn Write) -> Result<()> {
        for (index, (label, data_set)) in data.data_sets.iter().enumerate() {
            if index > 0 {
                out.write_all(b"\n")?;
            }
            debug!("Writing dataset '{}' ({} rows) as CSV", label, data_set.row_count());
            write_data_set(out, data_set)
                .with_context(|| format!("Failed to write dataset '{}' as CSV", label))?;
        }
        Ok(())
    }
}
