//! # Template Renderers (`report::template`)
//!
//! File: cli/src/report/template.rs
//!
//! ## Overview
//!
//! Two design-driven renderers that run the design's template resource through
//! Tera:
//! - `TextTemplateRenderer`: any text format, rendered verbatim.
//! - `ExcelTemplateRenderer`: SpreadsheetML (XML) workbooks, rendered with XML
//!   autoescaping so cell values cannot break the markup.
//!
//! ## Template context
//!
//! | Variable | Content |
//! |---|---|
//! | `datasets.<label>.columns` | column names |
//! | `datasets.<label>.rows` | rows of cell values |
//! | `parameters.<key>` | report parameters |
//! | `generated_at` | RFC 3339 timestamp of the run |
//! | `argument` | renderer argument, or empty |
//!
//! ```text
//! {% for row in datasets.dataset.rows %}{{ row.0 }}: {{ row.1 }}
//! {% endfor %}
//! ```
//!
use crate::core::error::{ReportFsError, Result};
use crate::core::templating;
use crate::report::content_type::ContentType;
use crate::report::dataset::ReportData;
use crate::report::design::ReportDesign;
use crate::report::renderer::{DesignSource, RendererKind, ReportRenderer};
use anyhow::{anyhow, Context};
use std::io::Write;
use tracing::debug;

/// Builds the Tera context shared by both template renderers.
pub fn template_context(data: &ReportData, argument: Option<&str>) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("datasets", &data.data_sets);
    context.insert("parameters", &data.parameters);
    context.insert("generated_at", &data.generated_at.to_rfc3339());
    context.insert("argument", argument.unwrap_or_default());
    context
}

fn render_design(
    design: Option<&ReportDesign>,
    data: &ReportData,
    argument: Option<&str>,
    autoescape: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let design = design.ok_or_else(|| {
        anyhow!(ReportFsError::Render(format!(
            "no design available for argument {:?}",
            argument
        )))
    })?;
    let template = design.template().ok_or_else(|| {
        anyhow!(ReportFsError::Render(format!(
            "design '{}' has no template resource",
            design.name
        )))
    })?;
    let context = template_context(data, argument);
    let rendered =
        templating::render_template_bytes(&design.name, &template.contents, &context, autoescape)?;
    debug!(
        "Rendered design '{}' into {} bytes",
        design.name,
        rendered.len()
    );
    out.write_all(rendered.as_bytes())
        .context("Failed to write rendered report")?;
    Ok(())
}

/// Renders a plain-text template resource.
#[derive(Debug)]
pub struct TextTemplateRenderer {
    designs: Box<dyn DesignSource>,
}

impl TextTemplateRenderer {
    pub fn new(designs: impl DesignSource + 'static) -> Self {
        Self {
            designs: Box::new(designs),
        }
    }
}

impl ReportRenderer for TextTemplateRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::TextTemplate
    }

    /// The template resource's own content type, `text/plain` without a design.
    fn content_type(&self) -> &str {
        self.designs
            .design(None)
            .and_then(ReportDesign::template)
            .map(|r| r.content_type.as_str())
            .unwrap_or(crate::report::content_type::DEFAULT_CONTENT_TYPE)
    }

    fn render(&self, data: &ReportData, argument: Option<&str>, out: &mut dyn Write) -> Result<()> {
        render_design(self.design(argument), data, argument, false, out)
    }

    fn design(&self, argument: Option<&str>) -> Option<&ReportDesign> {
        self.designs.design(argument)
    }
}

/// Renders a SpreadsheetML template resource with XML escaping.
#[derive(Debug)]
pub struct ExcelTemplateRenderer {
    designs: Box<dyn DesignSource>,
}

impl ExcelTemplateRenderer {
    pub fn new(designs: impl DesignSource + 'static) -> Self {
        Self {
            designs: Box::new(designs),
        }
    }
}

impl ReportRenderer for ExcelTemplateRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::ExcelTemplate
    }

    fn content_type(&self) -> &str {
        ContentType::Excel.mime()
    }

    fn render(&self, data: &ReportData, argument: Option<&str>, out: &mut dyn Write) -> Result<()> {
        render_design(self.design(argument), data, argument, true, out)
    }

    fn design(&self, argument: Option<&str>) -> Option<&ReportDesign> {
        self.designs.design(argument)
    }
}
