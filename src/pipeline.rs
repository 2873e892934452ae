//! End-to-end conversion: read the export, parse, classify, write.

use std::collections::BTreeMap;
use std::path::PathBuf;

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::extract::{
    Difficulty, EnrichedQuote, NamingRules, QuotationRecord, Theme, enrich, parse_with_report,
};
use crate::utils::fs::read_input;
use crate::writer::{CleanReport, WriteOptions, clean_output_dir, write_quotes};

/// Classify and name every record. Output order equals input order.
#[must_use]
pub fn enrich_all(records: Vec<QuotationRecord>, rules: &NamingRules) -> Vec<EnrichedQuote> {
    records
        .into_par_iter()
        .map(|record| enrich(record, rules))
        .collect()
}

/// Distribution of labels across a set of quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub total: usize,
    pub by_theme: BTreeMap<Theme, usize>,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub with_notes: usize,
    pub favorites: usize,
    pub dropped_unresolved: usize,
    pub dropped_empty: usize,
}

impl ConversionStats {
    #[must_use]
    pub fn from_quotes(quotes: &[EnrichedQuote]) -> Self {
        Self {
            total: quotes.len(),
            by_theme: quotes.iter().map(|q| q.theme).counts().into_iter().collect(),
            by_difficulty: quotes
                .iter()
                .map(|q| q.difficulty)
                .counts()
                .into_iter()
                .collect(),
            with_notes: quotes.iter().filter(|q| q.record.note.is_some()).count(),
            favorites: quotes.iter().filter(|q| q.record.is_favorite()).count(),
            ..Self::default()
        }
    }
}

/// Parsed and enriched quotes of one document.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub quotes: Vec<EnrichedQuote>,
    pub stats: ConversionStats,
}

/// Parse and enrich a document without touching the filesystem.
#[must_use]
pub fn analyze(document: &str, rules: &NamingRules) -> Analysis {
    let report = parse_with_report(document);
    let quotes = enrich_all(report.records, rules);
    let stats = ConversionStats {
        dropped_unresolved: report.dropped_unresolved,
        dropped_empty: report.dropped_empty,
        ..ConversionStats::from_quotes(&quotes)
    };
    Analysis { quotes, stats }
}

/// Everything `convert` needs to know.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub clean: bool,
    pub dry_run: bool,
    pub index_width: usize,
    pub naming: NamingRules,
}

impl ConvertOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            input: config.input.path.clone(),
            output_dir: config.output.dir.clone(),
            clean: config.output.clean,
            dry_run: false,
            index_width: config.output.index_width,
            naming: config.naming.clone(),
        }
    }
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<CleanReport>,
    pub files: Vec<PathBuf>,
    pub stats: ConversionStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Run the whole conversion.
///
/// A missing input fails before the output directory is touched. A document
/// without any quotes is reported as a warning; the directory is still cleaned.
pub fn convert(options: &ConvertOptions) -> Result<ConversionReport> {
    info!(input = %options.input.display(), "reading highlight export");
    let document = read_input(&options.input)?;
    info!(chars = document.chars().count(), "read export");

    let cleaned = if options.clean && !options.dry_run {
        Some(clean_output_dir(&options.output_dir)?)
    } else {
        None
    };

    let analysis = analyze(&document, &options.naming);
    let mut warnings = Vec::new();

    if analysis.quotes.is_empty() {
        warn!(input = %options.input.display(), "no quotes found, check the file format");
        warnings.push(format!(
            "no quotes found in {}; check the file format",
            options.input.display()
        ));
    } else {
        info!(quotes = analysis.quotes.len(), "parsed quotes");
    }

    if analysis.stats.dropped_unresolved + analysis.stats.dropped_empty > 0 {
        warnings.push(format!(
            "skipped {} block(s) without a location and {} block(s) without text",
            analysis.stats.dropped_unresolved, analysis.stats.dropped_empty
        ));
    }

    let files = if analysis.quotes.is_empty() {
        Vec::new()
    } else {
        let write_options = WriteOptions {
            index_width: options.index_width,
            dry_run: options.dry_run,
        };
        write_quotes(&analysis.quotes, &options.output_dir, &write_options)?.files
    };

    info!(
        files = files.len(),
        dir = %options.output_dir.display(),
        dry_run = options.dry_run,
        "conversion finished"
    );

    Ok(ConversionReport {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        dry_run: options.dry_run,
        cleaned,
        files,
        stats: analysis.stats,
        warnings,
    })
}
