//! Title and slug derivation for quotes.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `M:` / `Q:` speaker markers used in dialogue transcripts.
static SPEAKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[MQ]:\s*").unwrap());

static NON_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

static NON_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static SEPARATOR_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Word counts and limits used to derive titles and slugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRules {
    /// Words used for the first title attempt.
    pub title_words: usize,
    /// Words used when the first attempt is too short.
    pub title_fallback_words: usize,
    /// Titles shorter than this (in characters) trigger the fallback.
    pub min_title_chars: usize,
    /// Words used for the filename slug.
    pub slug_words: usize,
    /// Slug used when nothing survives sanitization.
    pub slug_fallback: String,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            title_words: 7,
            title_fallback_words: 12,
            min_title_chars: 10,
            slug_words: 7,
            slug_fallback: "quote".to_string(),
        }
    }
}

fn leading_words(text: &str, count: usize) -> String {
    text.split_whitespace().take(count).collect::<Vec<_>>().join(" ")
}

fn title_from_words(text: &str, count: usize) -> String {
    let words = leading_words(text, count);
    let without_speakers = SPEAKER_REGEX.replace_all(&words, "");
    NON_WORD_REGEX
        .replace_all(&without_speakers, "")
        .trim()
        .to_string()
}

/// Build a title from the opening words of `text` using `rules`.
///
/// Speaker markers and punctuation are removed. A title shorter than
/// `min_title_chars` is rebuilt from `title_fallback_words` words; the result
/// may still be short or empty for punctuation-only quotes.
#[must_use]
pub fn generate_title_with(text: &str, rules: &NamingRules) -> String {
    let title = title_from_words(text, rules.title_words);
    if title.chars().count() < rules.min_title_chars {
        return title_from_words(text, rules.title_fallback_words);
    }
    title
}

/// Build a title with the default rules (7 words, 12-word fallback under 10 chars).
#[must_use]
pub fn generate_title(text: &str) -> String {
    generate_title_with(text, &NamingRules::default())
}

/// Build a lowercase, hyphenated, filename-safe slug using `rules`.
///
/// Slugs are not unique; the writer prefixes each file with its position.
#[must_use]
pub fn create_slug_with(text: &str, rules: &NamingRules) -> String {
    let words = leading_words(text, rules.slug_words).to_lowercase();
    let cleaned = NON_SLUG_REGEX.replace_all(&words, "");
    let slug = SEPARATOR_RUN_REGEX.replace_all(&cleaned, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        rules.slug_fallback.clone()
    } else {
        slug.to_string()
    }
}

/// Build a slug with the default rules (first 7 words, fallback `"quote"`).
#[must_use]
pub fn create_slug(text: &str) -> String {
    create_slug_with(text, &NamingRules::default())
}
