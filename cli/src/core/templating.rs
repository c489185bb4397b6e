//! # reportfs Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Thin layer over the Tera engine used by the template-based report renderers.
//! Templates arrive as raw bytes (the contents of a design resource), are decoded
//! as UTF-8 and rendered once against a `tera::Context`.
//!
//! ## Architecture
//!
//! - `render_template_bytes`: decode + `Tera::one_off`, wrapping failures in
//!   `ReportFsError::Template` with the resource name as context.
//!
//! Autoescaping is caller-controlled: plain-text templates render verbatim, while
//! spreadsheet (XML) templates escape `<`, `>`, `&` and quotes in substituted values.
//!
use crate::core::error::{ReportFsError, Result};
use anyhow::{anyhow, Context};
use tera::Tera;
use tracing::debug;

/// Renders `template` against `context` in a single pass.
///
/// # Errors
///
/// Returns an `Err` if the template bytes are not UTF-8 or Tera rejects the
/// template (syntax error, missing variable, failing filter).
pub fn render_template_bytes(
    name: &str,
    template: &[u8],
    context: &tera::Context,
    autoescape: bool,
) -> Result<String> {
    let source = std::str::from_utf8(template)
        .with_context(|| format!("Template '{}' is not valid UTF-8", name))?;
    debug!(
        "Rendering template '{}' ({} bytes, autoescape={})",
        name,
        template.len(),
        autoescape
    );
    Tera::one_off(source, context, autoescape).map_err(|e| {
        anyhow!(ReportFsError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })
}
