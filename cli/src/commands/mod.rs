//! # reportfs Command Router
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module defines the reportfs subcommands and routes each one to its
//! handler. Every handler is a thin layer over the library: it builds a
//! `FileHelper` from the loaded configuration, calls one operation, and prints
//! the result.
//!
//! ## Architecture
//!
//! - `Commands`: enum of all subcommands, each holding its own `clap` args struct.
//! - `CommandContext`: configuration plus the `FileHelper` built from it.
//! - `handle_command`: dispatcher; output goes to the supplied writer so unit
//!   tests can capture it.
//!
//! ## Examples
//!
//! ```bash
//! reportfs write exports/summary.csv.gz --text "a,b"
//! reportfs append exports/run.log.gz "export finished"
//! reportfs lines exports/run.log.gz --numbered
//! reportfs csv visits.toml --out exports/visits.csv.gz
//! reportfs render monthly.xls --data visits.toml --out exports/monthly.xls
//! reportfs resources
//! ```
//!
use crate::common::fs::FileHelper;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Subcommand;
use std::io::Write;

mod append;
mod csv;
mod lines;
mod read;
mod render;
mod resources;
mod write;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub helper: FileHelper,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        let helper = FileHelper::from_config(&config);
        Self { config, helper }
    }
}

/// All top-level reportfs subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write text (or stdin) to a file, gzip-compressing `.gz` targets.
    #[command(alias = "w")]
    Write(write::WriteArgs),
    /// Print a file, inflating `.gz` sources.
    #[command(alias = "r")]
    Read(read::ReadArgs),
    /// Append a line of text to a file, creating it when missing.
    #[command(alias = "a")]
    Append(append::AppendArgs),
    /// Print a file one line at a time.
    #[command(alias = "l")]
    Lines(lines::LinesArgs),
    /// Convert a TOML dataset to CSV.
    Csv(csv::CsvArgs),
    /// Render a dataset through a template resource.
    Render(render::RenderArgs),
    /// List the template resources in the configured resource directory.
    Resources(resources::ResourcesArgs),
}

/// Runs `command`, writing any user-facing output to `out`.
pub fn handle_command(command: Commands, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Write(args) => write::handle_write(args, ctx),
        Commands::Read(args) => read::handle_read(args, ctx, out),
        Commands::Append(args) => append::handle_append(args, ctx),
        Commands::Lines(args) => lines::handle_lines(args, ctx, out),
        Commands::Csv(args) => csv::handle_csv(args, ctx, out),
        Commands::Render(args) => render::handle_render(args, ctx, out),
        Commands::Resources(args) => resources::handle_resources(args, ctx, out),
    }
}
