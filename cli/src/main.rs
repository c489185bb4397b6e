//! # reportfs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the reportfs CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and routing to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! reportfs --help
//!
//! # Append to a compressed log with informational logging
//! reportfs -v append exports/run.log.gz "export finished"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (`--config`, or user + project files)
//! 4. Route to the command handler
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use reportfs::commands::{self, CommandContext, Commands};
use reportfs::core::config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "reportfs",
    about = "Gzip-aware report file utilities",
    long_about = "Read, write and append report files (transparently gzip-compressing `.gz` targets),\n\
                  convert datasets to CSV, and render datasets through template resources.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the user and project files.
    #[arg(short, long, global = true, env = "REPORTFS_CONFIG")]
    config: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = config::load_config(cli.config.as_deref())?;
    let ctx = CommandContext::new(cfg);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::handle_command(cli.command, &ctx, &mut out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
