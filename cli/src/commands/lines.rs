//! # reportfs Lines Command
//!
//! File: cli/src/commands/lines.rs
//!
//! `reportfs lines <path> [--numbered]` splits a file into lines using the
//! configured separator and prints one per output line.
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct LinesArgs {
    /// File to split. A `.gz` suffix enables decompression.
    pub path: PathBuf,
    /// Prefix each line with its 1-based number.
    #[arg(short, long)]
    pub numbered: bool,
}

pub fn handle_lines(args: LinesArgs, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    for (index, line) in ctx.helper.read_lines(&args.path)?.iter().enumerate() {
        if args.numbered {
            writeln!(out, "{:>6}  {}", index + 1, line)?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use tempfile::tempdir;

    #[test]
    fn test_numbered_lines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("log.gz");
        let ctx = CommandContext::new(Config::default());
        ctx.helper.append_string(&path, "first")?;
        ctx.helper.append_string(&path, "second")?;

        let mut out = Vec::new();
        handle_lines(
            LinesArgs {
                path,
                numbered: true,
            },
            &ctx,
            &mut out,
        )?;
        assert_eq!(String::from_utf8(out)?, "     1  first\n     2  second\n");
        Ok(())
    }
}
