//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod classify;
pub mod convert;
pub mod parse;
pub mod stats;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Convert(args) => convert::run(ctx, args),
        Commands::Parse(args) => parse::run(ctx, args),
        Commands::Classify(args) => classify::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
    }
}

/// Input path from a flag, falling back to `[input] path`.
pub(crate) fn input_path(ctx: &AppContext, flag: Option<&Path>) -> PathBuf {
    ctx.resolve(flag.unwrap_or(ctx.config.input.path.as_path()))
}
