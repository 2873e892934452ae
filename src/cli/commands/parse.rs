//! qm parse - Show parsed and classified quotes without writing files

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::commands::input_path;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::pipeline::analyze;
use crate::utils::fs::read_input;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Highlight export to read (default: [input] path from config)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &ParseArgs) -> Result<()> {
    let path = input_path(ctx, args.input.as_deref());
    let document = read_input(&path)?;
    let analysis = analyze(&document, &ctx.config.naming);

    if ctx.robot {
        return emit_json(&robot_ok(&analysis.quotes));
    }

    for quote in &analysis.quotes {
        println!(
            "{} {} [{} / {}]",
            format!("#{}", quote.record.location).dimmed(),
            quote.title.bold(),
            quote.theme.to_string().cyan(),
            quote.difficulty.to_string().yellow(),
        );
        println!("    {}", quote.record.text);
        if !quote.record.tags.is_empty() {
            println!("    tags: {}", quote.record.tags.join(", "));
        }
        if let Some(note) = &quote.record.note {
            println!("    note: {note}");
        }
    }
    println!("{} quotes", analysis.quotes.len());
    Ok(())
}
