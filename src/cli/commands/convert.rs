//! qm convert - Write one markdown file per quote

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::commands::{input_path, stats::print_stats};
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::pipeline::{ConvertOptions, convert};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Highlight export to read (default: [input] path from config)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Directory for generated quote files (default: [output] dir from config)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Keep existing files in the output directory
    #[arg(long)]
    pub no_clean: bool,

    /// Show what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(ctx: &AppContext, args: &ConvertArgs) -> Result<()> {
    let mut options = ConvertOptions::from_config(&ctx.config);
    options.input = input_path(ctx, args.input.as_deref());
    options.output_dir = ctx.resolve(
        args.output
            .as_deref()
            .unwrap_or(ctx.config.output.dir.as_path()),
    );
    options.clean = options.clean && !args.no_clean;
    options.dry_run = args.dry_run;

    let report = convert(&options)?;

    if ctx.robot {
        let warnings = report.warnings.clone();
        return emit_json(&robot_ok(&report).with_warnings(warnings));
    }

    for warning in &report.warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }

    let verb = if report.dry_run { "Would create" } else { "Created" };
    for file in &report.files {
        let name = file.file_name().map_or_else(
            || file.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        println!("{verb}: {name}");
    }

    println!();
    print_stats(&report.stats);
    println!(
        "\n{} {} {} files in '{}'",
        "Done!".green().bold(),
        verb,
        report.files.len(),
        report.output_dir.display()
    );
    Ok(())
}
