//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "distgen", about = "Synthesize bundler configurations", version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print synthesized configuration as JSON
    Config(ConfigArgs),
    /// List registered build targets
    Targets(TargetsArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Target to synthesize; falls back to the TARGET environment variable.
    /// When neither is set, every registered target is printed.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to the package manifest (default: <root>/package.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct TargetsArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
