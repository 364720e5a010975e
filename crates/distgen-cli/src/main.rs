//! distgen CLI - prints synthesized bundler configurations.
//!
//! This is the entry point a build script calls before invoking the bundler:
//! it resolves the build environment, loads the package manifest, and emits
//! the configuration(s) as JSON.

mod cli;
mod commands;
mod logger;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet);

    match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::Targets(targets_args) => commands::targets_execute(targets_args),
    }
}
