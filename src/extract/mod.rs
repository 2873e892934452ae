//! Quote extraction for e-reader highlight exports.
//!
//! The extraction pipeline consists of:
//! 1. **Parser** - Rebuilds quote boundaries, notes and tags from the export lines
//! 2. **Classifiers** - Score each quote against theme and difficulty keyword tables
//! 3. **Formatting** - Derive a title and a filename slug from the quote text
//!
//! # Example
//!
//! ```
//! use quotemill::extract::{enrich, parse, NamingRules};
//!
//! let doc = "- M: The world you see is a projection of the mind. (Location 42)";
//! let records = parse(doc);
//! let quote = enrich(records[0].clone(), &NamingRules::default());
//!
//! assert_eq!(quote.record.location, 42);
//! assert_eq!(quote.theme.as_str(), "reality");
//! assert_eq!(quote.title, "The world you see is a");
//! ```

mod classifiers;
pub mod formatting;
mod parser;
mod types;

pub use classifiers::*;
pub use formatting::{NamingRules, create_slug, create_slug_with, generate_title, generate_title_with};
pub use parser::*;
pub use types::*;

/// Attach title, slug, theme and difficulty to a parsed record.
#[must_use]
pub fn enrich(record: QuotationRecord, rules: &NamingRules) -> EnrichedQuote {
    let (theme, difficulty) = classify(&record.text);
    EnrichedQuote {
        title: generate_title_with(&record.text, rules),
        slug: create_slug_with(&record.text, rules),
        theme,
        difficulty,
        record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrich_derives_all_fields_from_text() {
        let record = QuotationRecord {
            text: "Q: Who am I? Find out by investigating yourself.".to_string(),
            location: 9,
            tags: Vec::new(),
            note: None,
        };
        let quote = enrich(record, &NamingRules::default());
        assert_eq!(quote.title, "Who am I Find out by");
        assert_eq!(quote.slug, "q-who-am-i-find-out-by");
        assert_eq!(quote.theme, Theme::SelfInquiry);
        assert_eq!(quote.difficulty, Difficulty::Intermediate);
    }
}
