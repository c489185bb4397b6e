//! # reportfs Render Command
//!
//! File: cli/src/commands/render.rs
//!
//! ## Overview
//!
//! `reportfs render <resource> --data <dataset.toml>` resolves a rendering mode
//! from a template resource in the configured resource directory, renders the
//! dataset through it, and prints or writes the result.
//!
//! ## Workflow
//!
//! 1. Resolve the mode with `rendering_mode_from_resource` (fails fast on a bad resource).
//! 2. Load the dataset and file it under the label `dataset`.
//! 3. Add any `--param key=value` pairs to the report parameters.
//! 4. Render into memory, then print or write via the file helper.
//!
//! ```bash
//! reportfs render monthly.xls --data visits.toml --param month=March --out exports/march.xls.gz
//! ```
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use crate::report::util::DEFAULT_DATA_SET_LABEL;
use crate::report::{rendering_mode_from_resource, DataSet, DirectoryResourceProvider, ReportData};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template resource name, relative to the resource directory.
    pub resource: String,
    /// Dataset file (TOML, optionally `.gz`).
    #[arg(short, long)]
    pub data: PathBuf,
    /// Label of the rendering mode. Defaults to the resource name.
    #[arg(short, long)]
    pub label: Option<String>,
    /// Report parameter as `key=value`. Repeatable.
    #[arg(short, long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
    /// Override the configured resource directory.
    #[arg(long, env = "REPORTFS_RESOURCE_DIR")]
    pub resource_dir: Option<PathBuf>,
    /// Destination file. Prints to stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}

pub fn handle_render(args: RenderArgs, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    let root = args
        .resource_dir
        .unwrap_or_else(|| PathBuf::from(&ctx.config.resources.directory));
    debug!("Resolving resource '{}' under {}", args.resource, root.display());
    let provider = DirectoryResourceProvider::new(root);

    let label = args.label.unwrap_or_else(|| args.resource.clone());
    let mode = rendering_mode_from_resource(&label, &args.resource, &provider)?;

    let data_set = DataSet::from_file(&args.data, &ctx.helper)?;
    let mut data = ReportData::new().with_data_set(DEFAULT_DATA_SET_LABEL, data_set);
    for (key, value) in args.params {
        data = data.with_parameter(key, value);
    }

    let mut rendered = Vec::new();
    mode.render(&data, &mut rendered)?;

    match args.out {
        Some(path) => {
            ctx.helper.write_bytes(&path, &rendered)?;
            info!(
                "Rendered '{}' ({}) to {}",
                mode.label,
                mode.content_type(),
                path.display()
            );
        }
        None => out.write_all(&rendered)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("month=March=3"),
            Ok(("month".to_string(), "March=3".to_string()))
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_render_text_template() -> Result<()> {
        let dir = tempdir()?;
        let templates = dir.path().join("templates");
        fs::create_dir(&templates)?;
        fs::write(
            templates.join("summary.txt"),
            "{{ parameters.month }}: {{ datasets.dataset.rows | length }} clinics",
        )?;
        let data = dir.path().join("visits.toml");
        fs::write(
            &data,
            "columns = [\"clinic\"]\nrows = [[\"North\"], [\"South\"]]\n",
        )?;

        let mut config = Config::default();
        config.resources.directory = templates.to_string_lossy().into_owned();
        let ctx = CommandContext::new(config);

        let mut out = Vec::new();
        handle_render(
            RenderArgs {
                resource: "summary.txt".into(),
                data,
                label: None,
                params: vec![("month".into(), "March".into())],
                resource_dir: None,
                out: None,
            },
            &ctx,
            &mut out,
        )?;
        assert_eq!(String::from_utf8(out)?, "March: 2 clinics");
        Ok(())
    }
}
