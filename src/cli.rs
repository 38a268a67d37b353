use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Apex burst-interval analyzer.
#[derive(Parser)]
#[command(
    name = "apex",
    version,
    about = "Find the most intense fixed-length interval in a per-second damage timeline"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Rank party members by their best burst window in an encounter log.
    Rank(RankArgs),
    /// Scan a plain numeric series for its best window.
    Scan(ScanArgs),
}

/// Arguments for the `rank` subcommand.
#[derive(clap::Args)]
pub struct RankArgs {
    /// Path to JSON encounter log.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file. Built-in defaults when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override window length (samples) from config.
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Override the report row cap from config.
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Write the full report as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `scan` subcommand.
#[derive(clap::Args)]
pub struct ScanArgs {
    /// Path to sample series file, one number per line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file. Built-in defaults when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override window length (samples) from config.
    #[arg(short, long)]
    pub window: Option<usize>,
}
