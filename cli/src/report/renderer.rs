//! # Renderer Contract (`report::renderer`)
//!
//! File: cli/src/report/renderer.rs
//!
//! ## Overview
//!
//! `ReportRenderer` is the strategy seam every output format implements:
//! `render(data, argument, sink)` writes the report bytes, and
//! `design(argument)` exposes the design a template renderer works from.
//!
//! Template renderers do not look designs up themselves. They are handed a
//! `DesignSource`; `FixedDesign` is the source that answers every argument with
//! the same design, which is how a rendering mode built from a single resource
//! pins its template.
//!
use crate::core::error::Result;
use crate::report::dataset::ReportData;
use crate::report::design::ReportDesign;
use std::fmt::Debug;
use std::io::Write;

/// Which family a renderer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Csv,
    TextTemplate,
    ExcelTemplate,
}

/// Converts report data into an output byte stream.
pub trait ReportRenderer: Debug + Send + Sync {
    fn kind(&self) -> RendererKind;

    /// MIME type of what `render` produces.
    fn content_type(&self) -> &str;

    /// Writes the rendered report for `data` to `out`.
    fn render(&self, data: &ReportData, argument: Option<&str>, out: &mut dyn Write) -> Result<()>;

    /// The design used for `argument`, if this renderer is design-driven.
    fn design(&self, _argument: Option<&str>) -> Option<&ReportDesign> {
        None
    }
}

/// Resolves the design a template renderer should use for an argument.
pub trait DesignSource: Debug + Send + Sync {
    fn design(&self, argument: Option<&str>) -> Option<&ReportDesign>;
}

/// A `DesignSource` that ignores the argument and always returns one design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDesign(ReportDesign);

impl FixedDesign {
    pub fn new(design: ReportDesign) -> Self {
        Self(design)
    }
}

impl DesignSource for FixedDesign {
    fn design(&self, _argument: Option<&str>) -> Option<&ReportDesign> {
        Some(&self.0)
    }
}
