//! Core types for the drill conversion pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card as found in the source document, before any rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    /// Problem number, captured verbatim from the header.
    pub id: String,
    pub question: String,
    pub answer: String,
    /// 1-based line of the card header.
    pub line_number: usize,
}

/// One encoded side of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub text: String,
    /// Referenced image filenames in textual order, without duplicates.
    pub media: Vec<String>,
}

impl Side {
    /// The image that fills a single-slot column, if any.
    pub fn slot(&self) -> Option<&str> {
        self.media.first().map(String::as_str)
    }
}

/// Card encoded for one output dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformedCard {
    pub id: String,
    pub tags: Vec<String>,
    pub front: Side,
    pub back: Side,
}

impl TransformedCard {
    /// Tags joined the way both tabular formats and the deck XML expect.
    pub fn tags_field(&self) -> String {
        self.tags.join(",")
    }

    /// Every image referenced on either side, front first.
    pub fn all_media(&self) -> impl Iterator<Item = &str> {
        self.front
            .media
            .iter()
            .chain(self.back.media.iter())
            .map(String::as_str)
    }
}

/// Output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dialect {
    /// Three quoted columns: front, back, tags. HTML inline.
    #[serde(rename = "csv")]
    TabularPlain,
    /// Seven columns with one image slot per side.
    #[serde(rename = "slotted")]
    TabularSlotted,
    /// Deck XML with rich-text fields and content-addressed images.
    #[serde(rename = "xml")]
    TaggedMarkup,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Self::TabularPlain, Self::TabularSlotted, Self::TaggedMarkup];

    /// Get the dialect name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TabularPlain => "csv",
            Self::TabularSlotted => "slotted",
            Self::TaggedMarkup => "xml",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
