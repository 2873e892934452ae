//! Quote file writer.
//!
//! Each enriched quote becomes one markdown file: a YAML frontmatter block
//! (`title`, `theme`, `difficulty`, `page`, optional `tags`), a blank line,
//! the quote text, and an optional `**Note:**` paragraph. Files are named
//! `NNN-slug.md` by position so identical slugs never collide.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{QmError, Result};
use crate::extract::{Difficulty, EnrichedQuote, Theme};
use crate::utils::fs::ensure_dir;

const QUOTE_EXTENSION: &str = "md";

#[derive(Serialize)]
struct Frontmatter<'a> {
    title: &'a str,
    theme: Theme,
    difficulty: Difficulty,
    page: u64,
    #[serde(skip_serializing_if = "no_tags")]
    tags: &'a [String],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_tags(tags: &&[String]) -> bool {
    tags.is_empty()
}

/// Render the full file contents for one quote.
pub fn render_quote(quote: &EnrichedQuote) -> Result<String> {
    let frontmatter = Frontmatter {
        title: &quote.title,
        theme: quote.theme,
        difficulty: quote.difficulty,
        page: quote.record.location,
        tags: &quote.record.tags,
    };
    let yaml = serde_yaml::to_string(&frontmatter)?;

    let mut out = String::with_capacity(yaml.len() + quote.record.text.len() + 16);
    out.push_str("---\n");
    out.push_str(&yaml);
    out.push_str("---\n\n");
    out.push_str(&quote.record.text);
    if let Some(note) = &quote.record.note {
        let _ = write!(out, "\n\n**Note:** {note}");
    }
    Ok(out)
}

/// File name for the quote at zero-based `index`.
#[must_use]
pub fn file_name(index: usize, slug: &str, width: usize) -> String {
    format!("{:0width$}-{slug}.{QUOTE_EXTENSION}", index + 1)
}

/// What `clean_output_dir` did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// The directory did not exist and was created.
    pub created: bool,
    /// Files removed from the directory.
    pub removed: Vec<PathBuf>,
}

/// Remove every regular file directly inside `dir`, or create `dir`.
///
/// Subdirectories are left untouched.
pub fn clean_output_dir(dir: &Path) -> Result<CleanReport> {
    let clean_err = |source| QmError::CleanOutput {
        path: dir.to_path_buf(),
        source,
    };

    if !dir.exists() {
        info!(dir = %dir.display(), "output directory does not exist, creating it");
        std::fs::create_dir_all(dir).map_err(clean_err)?;
        return Ok(CleanReport {
            created: true,
            removed: Vec::new(),
        });
    }

    let mut removed = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(clean_err)? {
        let path = entry.map_err(clean_err)?.path();
        if path.is_file() {
            std::fs::remove_file(&path).map_err(|source| QmError::CleanOutput {
                path: path.clone(),
                source,
            })?;
            debug!(file = %path.display(), "removed");
            removed.push(path);
        }
    }
    removed.sort();

    info!(dir = %dir.display(), removed = removed.len(), "cleaned output directory");
    Ok(CleanReport {
        created: false,
        removed,
    })
}

/// Options for `write_quotes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Zero-padding width of the numeric file prefix.
    pub index_width: usize,
    /// Compute file paths without touching the disk.
    pub dry_run: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            index_width: 3,
            dry_run: false,
        }
    }
}

/// Files produced by `write_quotes`, in quote order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub files: Vec<PathBuf>,
}

/// Write one file per quote into `dir`, in sequence order.
pub fn write_quotes(
    quotes: &[EnrichedQuote],
    dir: &Path,
    options: &WriteOptions,
) -> Result<WriteReport> {
    if !options.dry_run {
        ensure_dir(dir)?;
    }

    let mut files = Vec::with_capacity(quotes.len());
    for (index, quote) in quotes.iter().enumerate() {
        let path = dir.join(file_name(index, &quote.slug, options.index_width));
        if !options.dry_run {
            let contents = render_quote(quote)?;
            std::fs::write(&path, contents).map_err(|source| QmError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            debug!(file = %path.display(), "created");
        }
        files.push(path);
    }

    Ok(WriteReport { files })
}
