//! # reportfs CSV Command
//!
//! File: cli/src/commands/csv.rs
//!
//! `reportfs csv <dataset.toml> [--out PATH]` converts a TOML dataset to CSV.
//! The result is printed, or written through the file helper when `--out` is
//! given (so `--out visits.csv.gz` produces a compressed export).
//!
use crate::commands::CommandContext;
use crate::core::error::Result;
use crate::report::{to_csv, DataSet};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// Dataset file (TOML, optionally `.gz`).
    pub data: PathBuf,
    /// Destination file. Prints to stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn handle_csv(args: CsvArgs, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    let data_set = DataSet::from_file(&args.data, &ctx.helper)?;
    let csv = to_csv(&data_set)?;
    match args.out {
        Some(path) => {
            ctx.helper.write_string(&path, &csv)?;
            info!(
                "Wrote {} rows as CSV to {}",
                data_set.row_count(),
                path.display()
            );
        }
        None => out.write_all(csv.as_bytes())?,
    }
    Ok(())
}
