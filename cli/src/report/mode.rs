//! # Rendering Modes (`report::mode`)
//!
//! File: cli/src/report/mode.rs
//!
//! ## Overview
//!
//! A `RenderingMode` is an output format offered to a user: a label, the file
//! extension of what it produces, and the renderer that produces it.
//!
//! `rendering_mode_from_resource` builds one from a single template resource:
//! 1. open the resource through the given `ResourceProvider` and read it fully as UTF-8;
//! 2. take the extension from the text after the last `.` in the resource name;
//! 3. look up the content type, defaulting to `text/plain`;
//! 4. wrap the bytes in a `template` resource inside a one-resource design;
//! 5. pick `ExcelTemplateRenderer` for `xls`, `TextTemplateRenderer` otherwise,
//!    both pinned to that design through `FixedDesign`.
//!
//! Any failure is a `ReportFsError::Resource`. It is meant to run while
//! setting up and should stop startup rather than be retried.
//!
//! ```rust,ignore
//! let provider = DirectoryResourceProvider::new("/srv/templates");
//! let mode = rendering_mode_from_resource("Monthly summary", "monthly.xls", &provider)?;
//! assert_eq!(mode.extension, "xls");
//! mode.render(&data, &mut out)?;
//! ```
//!
use crate::core::error::{ReportFsError, Result};
use crate::report::content_type::{mime_for_extension, ContentType};
use crate::report::dataset::ReportData;
use crate::report::design::{ReportDesign, ReportDesignResource, TEMPLATE_RESOURCE_NAME};
use crate::report::renderer::{FixedDesign, ReportRenderer};
use crate::report::resource::ResourceProvider;
use crate::report::template::{ExcelTemplateRenderer, TextTemplateRenderer};
use anyhow::anyhow;
use std::io::{Read, Write};
use tracing::info;

/// A labelled output format backed by a renderer.
#[derive(Debug)]
pub struct RenderingMode {
    pub renderer: Box<dyn ReportRenderer>,
    pub label: String,
    pub extension: String,
    pub argument: Option<String>,
}

impl RenderingMode {
    pub fn new(
        renderer: Box<dyn ReportRenderer>,
        label: impl Into<String>,
        extension: impl Into<String>,
        argument: Option<String>,
    ) -> Self {
        Self {
            renderer,
            label: label.into(),
            extension: extension.into(),
            argument,
        }
    }

    /// Renders `data` with this mode's renderer and argument.
    pub fn render(&self, data: &ReportData, out: &mut dyn Write) -> Result<()> {
        self.renderer.render(data, self.argument.as_deref(), out)
    }

    pub fn content_type(&self) -> &str {
        self.renderer.content_type()
    }
}

fn resource_error(name: &str, reason: impl Into<String>) -> anyhow::Error {
    anyhow!(ReportFsError::Resource {
        name: name.to_string(),
        reason: reason.into(),
    })
}

/// Builds a rendering mode from the template resource `resource_name`.
///
/// # Errors
///
/// Returns `ReportFsError::Resource` when the resource cannot be opened or read,
/// is not valid UTF-8, or has no `.` in its name to take an extension from.
pub fn rendering_mode_from_resource(
    label: &str,
    resource_name: &str,
    provider: &dyn ResourceProvider,
) -> Result<RenderingMode> {
    let mut reader = provider
        .open(resource_name)
        .map_err(|e| resource_error(resource_name, format!("{:#}", e)))?;
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|e| resource_error(resource_name, e.to_string()))?;
    let text = String::from_utf8(raw)
        .map_err(|e| resource_error(resource_name, format!("not valid UTF-8: {}", e)))?;

    let extension = match resource_name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return Err(resource_error(resource_name, "name has no file extension")),
    };
    let resource = ReportDesignResource {
        name: TEMPLATE_RESOURCE_NAME.to_string(),
        extension: extension.to_string(),
        content_type: mime_for_extension(extension).to_string(),
        contents: text.into_bytes(),
    };
    let design = FixedDesign::new(ReportDesign::new(resource_name).with_resource(resource));

    let renderer: Box<dyn ReportRenderer> = if extension == ContentType::Excel.extension() {
        Box::new(ExcelTemplateRenderer::new(design))
    } else {
        Box::new(TextTemplateRenderer::new(design))
    };
    info!(
        "Resolved rendering mode '{}' from resource '{}' ({:?})",
        label,
        resource_name,
        renderer.kind()
    );
    Ok(RenderingMode::new(renderer, label, extension, None))
}
