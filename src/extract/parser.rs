//! Line-oriented parser for highlight export documents.
//!
//! The export is a flat markdown list: every highlight is a top-level bullet
//! ending in `(Location N)`, optionally followed by wrapped continuation lines
//! and indented `**Note:**` / `**Tags:**` sub-items. Parsing is a single fold
//! over the lines with one open quote at a time.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::types::{FAVORITE_TAG, QuotationRecord};

/// Header lines emitted by the exporter that never carry quote content.
const STRUCTURAL_PREFIXES: &[&str] = &[
    "# ",
    "![](",
    "### Metadata",
    "- Author:",
    "- Full Title:",
    "- Category:",
    "### Highlights",
];

const QUOTE_BULLET: &str = "- ";
const LOCATION_OPENER: &str = "(Location";
const FAVORITE_MARKER: &str = "**Tags:** #favorite";

/// Lines containing any of these are sub-items and never quote content.
const SUB_ITEM_MARKERS: &[&str] = &["**Note:**", "**Tags:**", "    -"];

static LOCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(Location\s*(\d+)\)").unwrap());

static BULLET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-\s*").unwrap());

static TRAILING_LOCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(Location\s*\d+\)\s*$").unwrap());

static NOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\*\*Note:\*\*\s*").unwrap());

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*\*\*Tags:\*\*\s*#").unwrap());

// =============================================================================
// LINE CLASSIFICATION
// =============================================================================

/// What a single trimmed line means to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Exporter header; affects nothing.
    Structural,
    /// A bullet that opens a new quote.
    QuoteStart {
        /// `None` when the marker has no parseable integer.
        location: Option<u64>,
        /// Text left on the marker line after removing bullet and annotation.
        fragment: Option<&'a str>,
    },
    /// `- **Note:** ...` sub-item.
    Note(&'a str),
    /// `- **Tags:** #...` sub-item.
    Tag(&'a str),
    /// Any other line carrying `**Tags:** #favorite`.
    Favorite,
    /// A wrapped line belonging to the open quote.
    Content(&'a str),
    /// Blank lines and malformed sub-items.
    Ignored,
}

/// Classify one line. Leading and trailing whitespace is ignored.
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Ignored;
    }

    if STRUCTURAL_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        return LineKind::Structural;
    }

    if line.starts_with(QUOTE_BULLET) && line.contains(LOCATION_OPENER) {
        return quote_start(line);
    }

    if let Some(label) = NOTE_REGEX.find(line) {
        return LineKind::Note(line[label.end()..].trim());
    }

    if let Some(label) = TAG_REGEX.find(line) {
        return LineKind::Tag(line[label.end()..].trim());
    }

    if line.contains(FAVORITE_MARKER) {
        return LineKind::Favorite;
    }

    if SUB_ITEM_MARKERS.iter().any(|marker| line.contains(marker)) {
        return LineKind::Ignored;
    }

    LineKind::Content(line)
}

fn quote_start(line: &str) -> LineKind<'_> {
    let location = LOCATION_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok());

    let body = BULLET_REGEX
        .find(line)
        .map_or(line, |bullet| &line[bullet.end()..]);
    let body = TRAILING_LOCATION_REGEX
        .find(body)
        .map_or(body, |annotation| &body[..annotation.start()])
        .trim();

    LineKind::QuoteStart {
        location,
        fragment: (!body.is_empty()).then_some(body),
    }
}

// =============================================================================
// PARSE STATE
// =============================================================================

/// The quote currently being accumulated.
#[derive(Debug, Default)]
struct OpenQuote<'a> {
    location: Option<u64>,
    fragments: Vec<&'a str>,
    tags: Vec<String>,
    note: Option<String>,
}

enum Sealed {
    Record(QuotationRecord),
    Unresolved,
    Empty,
}

impl OpenQuote<'_> {
    fn seal(self) -> Sealed {
        let Some(location) = self.location else {
            return Sealed::Unresolved;
        };
        let text = self.fragments.join(" ").trim().to_string();
        if text.is_empty() {
            return Sealed::Empty;
        }
        Sealed::Record(QuotationRecord {
            text,
            location,
            tags: self.tags,
            note: self.note,
        })
    }
}

/// Accumulator threaded through the line fold.
#[derive(Debug, Default)]
pub struct ParseState<'a> {
    open: Option<OpenQuote<'a>>,
    records: Vec<QuotationRecord>,
    dropped_unresolved: usize,
    dropped_empty: usize,
}

/// Result of parsing a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Sealed quotes in source order.
    pub records: Vec<QuotationRecord>,
    /// Quote blocks whose location marker could not be resolved.
    pub dropped_unresolved: usize,
    /// Quote blocks with a location marker but no text.
    pub dropped_empty: usize,
}

impl<'a> ParseState<'a> {
    /// Apply one source line.
    #[must_use]
    pub fn step(mut self, line: &'a str) -> Self {
        match classify_line(line) {
            LineKind::Structural | LineKind::Ignored => {}
            LineKind::QuoteStart { location, fragment } => {
                self.seal_open();
                match location {
                    Some(location) => debug!(location, "found quote marker"),
                    None => debug!(line = line.trim(), "quote marker without location"),
                }
                self.open = Some(OpenQuote {
                    location,
                    fragments: fragment.into_iter().collect(),
                    ..OpenQuote::default()
                });
            }
            LineKind::Note(note) => {
                if let Some(open) = self.open.as_mut() {
                    trace!(note, "found note");
                    open.note = (!note.is_empty()).then(|| note.to_string());
                }
            }
            LineKind::Tag(tag) => {
                if let Some(open) = self.open.as_mut() {
                    if !tag.is_empty() {
                        trace!(tag, "found tag");
                        open.tags.push(tag.to_string());
                    }
                }
            }
            LineKind::Favorite => {
                if let Some(open) = self.open.as_mut() {
                    trace!("found inline favorite marker");
                    open.tags.push(FAVORITE_TAG.to_string());
                }
            }
            LineKind::Content(text) => {
                if let Some(open) = self.open.as_mut().filter(|open| open.location.is_some()) {
                    open.fragments.push(text);
                }
            }
        }
        self
    }

    /// Seal the last open quote and return everything collected.
    #[must_use]
    pub fn finish(mut self) -> ParseReport {
        self.seal_open();
        ParseReport {
            records: self.records,
            dropped_unresolved: self.dropped_unresolved,
            dropped_empty: self.dropped_empty,
        }
    }

    fn seal_open(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        match open.seal() {
            Sealed::Record(record) => {
                debug!(
                    location = record.location,
                    chars = record.text.chars().count(),
                    tags = record.tags.len(),
                    "sealed quote"
                );
                self.records.push(record);
            }
            Sealed::Unresolved => {
                trace!("dropping quote without location");
                self.dropped_unresolved += 1;
            }
            Sealed::Empty => {
                trace!("dropping quote without text");
                self.dropped_empty += 1;
            }
        }
    }
}

/// Parse a document and report dropped blocks alongside the records.
#[must_use]
pub fn parse_with_report(document: &str) -> ParseReport {
    document
        .lines()
        .fold(ParseState::default(), ParseState::step)
        .finish()
}

/// Parse a highlight export into quotation records, in source order.
#[must_use]
pub fn parse(document: &str) -> Vec<QuotationRecord> {
    parse_with_report(document).records
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Line classification
    // =========================================================================

    #[test]
    fn header_lines_are_structural() {
        for line in [
            "# I Am That",
            "![](https://images.example/cover.jpg)",
            "### Metadata",
            "- Author: [[Nisargadatta Maharaj]]",
            "- Full Title: I Am That",
            "- Category: #books",
            "### Highlights",
        ] {
            assert_eq!(classify_line(line), LineKind::Structural, "{line}");
        }
    }

    #[test]
    fn quote_start_strips_bullet_and_location() {
        assert_eq!(
            classify_line("- Q: Who am I? (Location 120)"),
            LineKind::QuoteStart {
                location: Some(120),
                fragment: Some("Q: Who am I?"),
            }
        );
    }

    #[test]
    fn quote_start_without_digits_is_unresolved() {
        assert_eq!(
            classify_line("- Something (Location unknown)"),
            LineKind::QuoteStart {
                location: None,
                fragment: Some("Something (Location unknown)"),
            }
        );
    }

    #[test]
    fn quote_start_with_only_marker_has_no_fragment() {
        assert_eq!(
            classify_line("- (Location 7)"),
            LineKind::QuoteStart {
                location: Some(7),
                fragment: None,
            }
        );
    }

    #[test]
    fn oversized_location_does_not_resolve() {
        let line = "- Text (Location 99999999999999999999999)";
        assert!(matches!(
            classify_line(line),
            LineKind::QuoteStart { location: None, .. }
        ));
    }

    #[test]
    fn indented_sub_items_are_recognized() {
        assert_eq!(
            classify_line("    - **Note:** Ponder this."),
            LineKind::Note("Ponder this.")
        );
        assert_eq!(classify_line("    - **Tags:** #zen"), LineKind::Tag("zen"));
    }

    #[test]
    fn inline_favorite_marker_outside_sub_item() {
        assert_eq!(classify_line("* **Tags:** #favorite"), LineKind::Favorite);
    }

    #[test]
    fn tags_line_without_hash_is_ignored() {
        assert_eq!(classify_line("- **Tags:** zen"), LineKind::Ignored);
    }

    // =========================================================================
    // Document parsing
    // =========================================================================

    #[test]
    fn parses_single_quote_with_tag_and_note() {
        let doc = "- M: The world you see is a projection of the mind. (Location 42)\n    - **Tags:** #favorite\n    - **Note:** Ponder this.";
        let records = parse(doc);
        assert_eq!(
            records,
            vec![QuotationRecord {
                text: "M: The world you see is a projection of the mind.".to_string(),
                location: 42,
                tags: vec!["favorite".to_string()],
                note: Some("Ponder this.".to_string()),
            }]
        );
    }

    #[test]
    fn continuation_lines_join_with_single_spaces() {
        let doc = "- First part (Location 10)\n  second part\n\n   third part  \n- Next (Location 11)";
        let records = parse(doc);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "First part second part third part");
        assert_eq!(records[1].text, "Next");
    }

    #[test]
    fn marker_only_line_takes_text_from_continuation() {
        let doc = "- (Location 5)\nThe body arrives on the next line.";
        let records = parse(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "The body arrives on the next line.");
        assert_eq!(records[0].location, 5);
    }

    #[test]
    fn block_without_location_is_dropped() {
        let doc = "- Kept (Location 1)\n- Lost quote (Location x)\nmore lost text\n    - **Note:** lost note\n- Also kept (Location 3)";
        let report = parse_with_report(doc);
        let locations: Vec<u64> = report.records.iter().map(|r| r.location).collect();
        assert_eq!(locations, vec![1, 3]);
        assert_eq!(report.records[0].text, "Kept");
        assert!(report.records[0].note.is_none());
        assert_eq!(report.dropped_unresolved, 1);
    }

    #[test]
    fn block_with_blank_text_is_dropped() {
        let doc = "- (Location 8)\n   \n    - **Tags:** #orphan\n- Real (Location 9)";
        let report = parse_with_report(doc);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].location, 9);
        assert!(report.records[0].tags.is_empty());
        assert_eq!(report.dropped_empty, 1);
    }

    #[test]
    fn second_note_overwrites_and_tags_accumulate() {
        let doc = "- Quote (Location 3)\n    - **Note:** first\n    - **Note:** second\n    - **Tags:** #a\n    - **Tags:** #b\n    - **Tags:** #a";
        let records = parse(doc);
        assert_eq!(records[0].note.as_deref(), Some("second"));
        assert_eq!(records[0].tags, vec!["a", "b", "a"]);
    }

    #[test]
    fn empty_note_clears_previous_note() {
        let doc = "- Quote (Location 3)\n    - **Note:** first\n    - **Note:**";
        let records = parse(doc);
        assert!(records[0].note.is_none());
    }

    #[test]
    fn output_keeps_source_order() {
        let doc = "- a (Location 500)\n- b (Location 120)\n- c (Location 300)";
        let locations: Vec<u64> = parse(doc).iter().map(|r| r.location).collect();
        assert_eq!(locations, vec![500, 120, 300]);
    }

    #[test]
    fn headers_and_preamble_are_skipped() {
        let doc = "# I Am That\n\n![](cover.png)\n\n### Metadata\n- Author: Someone\n- Full Title: I Am That\n- Category: #books\n\n### Highlights\n\nStray text before any quote\n- There is nothing to do. (Location 77)";
        let records = parse(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "There is nothing to do.");
    }

    #[test]
    fn sub_items_before_first_quote_are_ignored() {
        let doc = "    - **Note:** floating\n    - **Tags:** #floating\n- Quote (Location 1)";
        let records = parse(doc);
        assert!(records[0].note.is_none());
        assert!(records[0].tags.is_empty());
    }

    #[test]
    fn malformed_sub_item_text_is_not_content() {
        let doc = "- Quote (Location 1)\nsee **Note:** inline";
        let records = parse(doc);
        assert_eq!(records[0].text, "Quote");
    }

    #[test]
    fn inline_favorite_appends_tag() {
        let doc = "- Quote (Location 1)\n* **Tags:** #favorite";
        let records = parse(doc);
        assert_eq!(records[0].tags, vec!["favorite"]);
        assert!(records[0].is_favorite());
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let doc = "- Quote one (Location 1)\r\n    - **Note:** n\r\n- Quote two (Location 2)\r\n";
        let records = parse(doc);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].note.as_deref(), Some("n"));
    }
}
