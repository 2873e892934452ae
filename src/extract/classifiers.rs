//! Keyword classifiers for quote theme and difficulty.
//!
//! Both tables are scored the same way: lowercase the text once, count how
//! many of a label's keywords occur as substrings, keep the label with the
//! strictly highest count. Ties go to the label declared first. Matching is
//! plain substring containment, so `"real"` also hits `"unreal"`.

use super::types::{Difficulty, Theme};

/// Ordered keyword table; declaration order is the tie-break order.
pub type KeywordTable<L> = &'static [(L, &'static [&'static str])];

pub const THEME_KEYWORDS: KeywordTable<Theme> = &[
    (
        Theme::Reality,
        &["reality", "real", "unreal", "appearance", "manifest", "projection", "world"],
    ),
    (
        Theme::SelfInquiry,
        &["who am i", "self", "investigate", "enquiry", "discover", "find yourself"],
    ),
    (
        Theme::Awareness,
        &["awareness", "witness", "observer", "attention", "conscious"],
    ),
    (
        Theme::Consciousness,
        &["consciousness", "mind", "thought", "memory"],
    ),
    (
        Theme::Wisdom,
        &["wisdom", "wise", "understand", "knowledge", "learn"],
    ),
    (
        Theme::Acceptance,
        &["accept", "surrender", "allow", "present moment", "as they are"],
    ),
    (
        Theme::Unity,
        &["unity", "one", "non-dual", "whole", "humanity", "all"],
    ),
    (Theme::Being, &["being", "existence", "am", "presence", "is"]),
    (Theme::Identity, &["i am", "me", "mine", "person", "ego", "self"]),
    (
        Theme::Liberation,
        &["free", "liberation", "freedom", "bondage", "attachment"],
    ),
    (Theme::Presence, &["now", "present", "moment", "here"]),
    (Theme::Truth, &["truth", "true", "real", "authentic"]),
];

pub const DIFFICULTY_KEYWORDS: KeywordTable<Difficulty> = &[
    (
        Difficulty::Beginner,
        &["love", "happy", "good", "simple", "basic", "start"],
    ),
    (
        Difficulty::Intermediate,
        &["mind", "desire", "fear", "practice", "observe"],
    ),
    (
        Difficulty::Advanced,
        &["reality", "consciousness", "absolute", "beyond", "void", "emptiness"],
    ),
];

/// Count how many of `keywords` occur in already-lowercased text.
#[must_use]
pub fn keyword_score(text_lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| text_lower.contains(*keyword))
        .count()
}

/// Pick the highest-scoring label, or `fallback` when nothing matches.
#[must_use]
pub fn best_label<L: Copy>(text_lower: &str, table: KeywordTable<L>, fallback: L) -> L {
    let mut best = fallback;
    let mut best_score = 0usize;

    for (label, keywords) in table {
        let score = keyword_score(text_lower, keywords);
        if score > best_score {
            best_score = score;
            best = *label;
        }
    }

    best
}

/// Classify the theme of a quote.
#[must_use]
pub fn classify_theme(text: &str) -> Theme {
    best_label(&text.to_lowercase(), THEME_KEYWORDS, Theme::DEFAULT)
}

/// Classify the difficulty of a quote.
#[must_use]
pub fn classify_difficulty(text: &str) -> Difficulty {
    best_label(&text.to_lowercase(), DIFFICULTY_KEYWORDS, Difficulty::DEFAULT)
}

/// Classify both theme and difficulty, lowercasing the text once.
#[must_use]
pub fn classify(text: &str) -> (Theme, Difficulty) {
    let text_lower = text.to_lowercase();
    (
        best_label(&text_lower, THEME_KEYWORDS, Theme::DEFAULT),
        best_label(&text_lower, DIFFICULTY_KEYWORDS, Difficulty::DEFAULT),
    )
}
