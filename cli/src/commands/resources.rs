//! # reportfs Resources Command
//!
//! File: cli/src/commands/resources.rs
//!
//! `reportfs resources` lists the template resources available to `render`,
//! with the renderer each would resolve to.
//!
//! ```text
//! Resources in '/home/user/.config/reportfs/templates':
//!
//! monthly.xls      application/vnd.ms-excel
//! summary.txt      text/plain
//!
//! Found 2 resource(s).
//! ```
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use crate::report::content_type::mime_for_extension;
use crate::report::{DirectoryResourceProvider, ResourceProvider};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ResourcesArgs {
    /// Override the configured resource directory.
    #[arg(long, env = "REPORTFS_RESOURCE_DIR")]
    pub resource_dir: Option<PathBuf>,
}

pub fn handle_resources(
    args: ResourcesArgs,
    ctx: &CommandContext,
    out: &mut dyn Write,
) -> Result<()> {
    let root = args
        .resource_dir
        .unwrap_or_else(|| PathBuf::from(&ctx.config.resources.directory));
    if !root.is_dir() {
        anyhow::bail!(
            "Resource directory '{}' is not a valid directory (or does not exist). Check the [resources] section of your reportfs configuration.",
            root.display()
        );
    }
    let provider = DirectoryResourceProvider::new(&root);
    let names = provider.list()?;

    writeln!(out, "Resources in '{}':", root.display())?;
    writeln!(out)?;
    if names.is_empty() {
        writeln!(out, "No resources found.")?;
        return Ok(());
    }
    let width = names.iter().map(String::len).max().unwrap_or(0);
    for name in &names {
        let mime = name
            .rsplit_once('.')
            .map(|(_, ext)| mime_for_extension(ext))
            .unwrap_or("-");
        writeln!(out, "{:<width$}  {}", name, mime, width = width)?;
    }
    writeln!(out)?;
    writeln!(out, "Found {} resource(s).", names.len())?;
    Ok(())
}
