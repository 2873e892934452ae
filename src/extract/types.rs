//! Data types shared by the parser, the classifiers and the writer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One highlighted passage recovered from an export document.
///
/// A record only exists once it has both non-empty text and a resolved
/// location marker; the parser never produces partial records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationRecord {
    /// Body of the quotation, source lines joined with single spaces.
    pub text: String,
    /// Reading-position marker from `(Location N)`.
    pub location: u64,
    /// Tags in encounter order, duplicates kept.
    #[serde(default)]
    pub tags: Vec<String>,
    /// The last note seen for this quotation.
    #[serde(default)]
    pub note: Option<String>,
}

impl QuotationRecord {
    /// Whether the record carries the `favorite` tag.
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.tags.iter().any(|tag| tag == FAVORITE_TAG)
    }
}

/// Tag appended by the inline favorite marker.
pub const FAVORITE_TAG: &str = "favorite";

/// Thematic category assigned by keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Reality,
    SelfInquiry,
    Awareness,
    Consciousness,
    Wisdom,
    Acceptance,
    Unity,
    Being,
    Identity,
    Liberation,
    Presence,
    Truth,
}

impl Theme {
    /// Label used when no theme keyword matches.
    pub const DEFAULT: Self = Self::Wisdom;

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reality => "reality",
            Self::SelfInquiry => "self-inquiry",
            Self::Awareness => "awareness",
            Self::Consciousness => "consciousness",
            Self::Wisdom => "wisdom",
            Self::Acceptance => "acceptance",
            Self::Unity => "unity",
            Self::Being => "being",
            Self::Identity => "identity",
            Self::Liberation => "liberation",
            Self::Presence => "presence",
            Self::Truth => "truth",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading difficulty assigned by keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Label used when no difficulty keyword matches.
    pub const DEFAULT: Self = Self::Intermediate;

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed record plus everything derived from its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedQuote {
    #[serde(flatten)]
    pub record: QuotationRecord,
    pub title: String,
    pub slug: String,
    pub theme: Theme,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_serializes_as_kebab_label() {
        let json = serde_json::to_string(&Theme::SelfInquiry).unwrap();
        assert_eq!(json, "\"self-inquiry\"");
        assert_eq!(Theme::SelfInquiry.to_string(), "self-inquiry");
    }

    #[test]
    fn difficulty_round_trips_through_serde() {
        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }

    #[test]
    fn defaults_match_fallback_labels() {
        assert_eq!(Theme::DEFAULT.as_str(), "wisdom");
        assert_eq!(Difficulty::DEFAULT.as_str(), "intermediate");
    }

    #[test]
    fn favorite_detection() {
        let record = QuotationRecord {
            text: "x".to_string(),
            location: 1,
            tags: vec!["zen".to_string(), "favorite".to_string()],
            note: None,
        };
        assert!(record.is_favorite());
    }
}
