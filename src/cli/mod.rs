//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// quotemill - Turn e-reader highlight exports into classified quote files
#[derive(Parser, Debug)]
#[command(name = "qm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ./quotemill.toml over ~/.config/quotemill/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a highlight export into one markdown file per quote
    Convert(commands::convert::ConvertArgs),

    /// Parse and classify an export without writing files
    Parse(commands::parse::ParseArgs),

    /// Classify a single piece of text
    Classify(commands::classify::ClassifyArgs),

    /// Show theme and difficulty distribution of an export
    Stats(commands::stats::StatsArgs),
}
