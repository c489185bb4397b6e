//! # reportfs Append Command
//!
//! File: cli/src/commands/append.rs
//!
//! `reportfs append <path> <text>` adds `text` as the new last line of `path`,
//! creating the file when it does not exist or cannot be read.
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// File to append to. A `.gz` suffix keeps it compressed.
    pub path: PathBuf,
    /// Line of text to append.
    pub text: String,
}

pub fn handle_append(args: AppendArgs, ctx: &CommandContext) -> Result<()> {
    ctx.helper.append_string(&args.path, &args.text)?;
    info!("Appended to {}", args.path.display());
    Ok(())
}
