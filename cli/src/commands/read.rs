//! # reportfs Read Command
//!
//! File: cli/src/commands/read.rs
//!
//! `reportfs read <path> [--bytes]` prints a file, inflating `.gz` sources.
//! By default the content must be UTF-8; `--bytes` copies it through untouched.
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// File to read. A `.gz` suffix enables decompression.
    pub path: PathBuf,
    /// Copy raw bytes instead of decoding UTF-8 text.
    #[arg(short, long)]
    pub bytes: bool,
}

pub fn handle_read(args: ReadArgs, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    if args.bytes {
        out.write_all(&ctx.helper.read_bytes(&args.path)?)?;
    } else {
        out.write_all(ctx.helper.read_string(&args.path)?.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
