//! qm stats - Theme and difficulty distribution of an export

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::commands::input_path;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::pipeline::{ConversionStats, analyze};
use crate::utils::fs::read_input;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Highlight export to read (default: [input] path from config)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &StatsArgs) -> Result<()> {
    let path = input_path(ctx, args.input.as_deref());
    let document = read_input(&path)?;
    let stats = analyze(&document, &ctx.config.naming).stats;

    if ctx.robot {
        return emit_json(&robot_ok(&stats));
    }

    print_stats(&stats);
    Ok(())
}

pub(crate) fn print_stats(stats: &ConversionStats) {
    println!("{} {}", "Quotes:".bold(), stats.total);
    println!("{}", "By theme:".bold());
    for (theme, count) in &stats.by_theme {
        println!("  {:<14} {count}", theme.to_string().cyan());
    }
    println!("{}", "By difficulty:".bold());
    for (difficulty, count) in &stats.by_difficulty {
        println!("  {:<14} {count}", difficulty.to_string().yellow());
    }
    println!("{} {}", "With notes:".bold(), stats.with_notes);
    println!("{} {}", "Favorites:".bold(), stats.favorites);
    if stats.dropped_unresolved + stats.dropped_empty > 0 {
        println!(
            "{} {} without location, {} without text",
            "Skipped:".bold(),
            stats.dropped_unresolved,
            stats.dropped_empty
        );
    }
}
