//! # reportfs Write Command
//!
//! File: cli/src/commands/write.rs
//!
//! `reportfs write <path> [--text TEXT]` replaces the file at `path`. Without
//! `--text` the raw bytes of stdin are written unchanged. Targets ending in
//! `.gz` are gzip-compressed.
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// File to write. A `.gz` suffix enables compression.
    pub path: PathBuf,
    /// Text to write. Reads stdin when omitted.
    #[arg(short, long)]
    pub text: Option<String>,
}

pub fn handle_write(args: WriteArgs, ctx: &CommandContext) -> Result<()> {
    match args.text {
        Some(text) => ctx.helper.write_string(&args.path, &text)?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read content from stdin")?;
            ctx.helper.write_bytes(&args.path, &bytes)?;
        }
    }
    info!("Wrote {}", args.path.display());
    Ok(())
}
