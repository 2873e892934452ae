//! qm classify - Label a single piece of text

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::extract::{Difficulty, Theme, classify, create_slug_with, generate_title_with};

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Text to classify
    pub text: String,
}

#[derive(Debug, Serialize)]
struct Classification<'a> {
    text: &'a str,
    title: String,
    slug: String,
    theme: Theme,
    difficulty: Difficulty,
}

pub fn run(ctx: &AppContext, args: &ClassifyArgs) -> Result<()> {
    let rules = &ctx.config.naming;
    let (theme, difficulty) = classify(&args.text);
    let result = Classification {
        text: &args.text,
        title: generate_title_with(&args.text, rules),
        slug: create_slug_with(&args.text, rules),
        theme,
        difficulty,
    };

    if ctx.robot {
        return emit_json(&robot_ok(result));
    }

    println!("{} {}", "title:".bold(), result.title);
    println!("{} {}", "slug:".bold(), result.slug);
    println!("{} {}", "theme:".bold(), result.theme.to_string().cyan());
    println!("{} {}", "difficulty:".bold(), result.difficulty.to_string().yellow());
    Ok(())
}
