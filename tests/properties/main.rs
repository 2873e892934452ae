//! Property tests for the extraction pipeline.

use proptest::prelude::*;

use quotemill::extract::{
    Difficulty, Theme, classify, create_slug, generate_title, parse, parse_with_report,
};

fn arb_quote_text() -> impl Strategy<Value = String> {
    r"[A-Za-z][A-Za-z ,.;'!?]{0,80}".prop_filter("needs a letter after trim", |s| {
        !s.trim().is_empty()
    })
}

fn render_block(text: &str, location: u64, tags: &[String], note: Option<&str>) -> String {
    let mut block = format!("- {text} (Location {location})\n");
    for tag in tags {
        block.push_str(&format!("    - **Tags:** #{tag}\n"));
    }
    if let Some(note) = note {
        block.push_str(&format!("    - **Note:** {note}\n"));
    }
    block
}

proptest! {
    #[test]
    fn records_follow_marker_order(
        blocks in prop::collection::vec((arb_quote_text(), 1u64..100_000), 0..20)
    ) {
        let doc: String = blocks
            .iter()
            .map(|(text, location)| render_block(text, *location, &[], None))
            .collect();
        let records = parse(&doc);
        let expected: Vec<u64> = blocks.iter().map(|(_, location)| *location).collect();
        let actual: Vec<u64> = records.iter().map(|r| r.location).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn unresolvable_markers_never_emit(
        good in prop::collection::vec(arb_quote_text(), 0..8),
        bad in prop::collection::vec(arb_quote_text(), 1..8),
    ) {
        let mut doc = String::new();
        for (i, text) in good.iter().enumerate() {
            doc.push_str(&render_block(text, i as u64 + 1, &[], None));
        }
        for text in &bad {
            doc.push_str(&format!("- {text} (Location ??)\n{text}\n"));
        }
        let report = parse_with_report(&doc);
        prop_assert_eq!(report.records.len(), good.len());
        prop_assert_eq!(report.dropped_unresolved, bad.len());
    }

    #[test]
    fn tags_accumulate_in_order(
        text in arb_quote_text(),
        tags in prop::collection::vec("[a-z]{1,10}", 0..6),
        notes in prop::collection::vec("[a-z]{1,10}", 1..4),
    ) {
        let mut doc = render_block(&text, 7, &tags, None);
        for note in &notes {
            doc.push_str(&format!("    - **Note:** {note}\n"));
        }
        let records = parse(&doc);
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(&records[0].tags, &tags);
        prop_assert_eq!(records[0].note.as_deref(), notes.last().map(String::as_str));
    }

    #[test]
    fn naming_and_classification_are_total(text in ".{0,200}") {
        let (theme, difficulty) = classify(&text);
        prop_assert_eq!(classify(&text), (theme, difficulty));
        let slug = create_slug(&text);
        prop_assert!(!slug.is_empty());
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.chars().any(char::is_whitespace));
        let _ = generate_title(&text);
    }

    #[test]
    fn ascii_slugs_are_filename_safe(text in "[ -~]{0,200}") {
        let slug = create_slug(&text);
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
            "unexpected slug {:?}",
            slug
        );
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn text_without_keywords_gets_defaults(text in "[xyzq ]{0,40}") {
        prop_assert_eq!(classify(&text), (Theme::Wisdom, Difficulty::Intermediate));
    }
}
