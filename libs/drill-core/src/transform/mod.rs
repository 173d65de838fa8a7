//! Content transformer.
//!
//! Rewrites a raw segment into one dialect's markup and collects the
//! images it references. Rules never fail: a pattern that does not match
//! leaves the text unchanged.

mod markup;
mod rules;
mod tabular;

pub use markup::escape_markup;

use crate::config::ExportConfig;
use crate::media::{self, MarkerSyntax};
use crate::types::{Dialect, RawCard, Side, TransformedCard};
use rules::{apply_all, Rule};

impl Dialect {
    /// Marker spelling this dialect recognises.
    pub fn marker_syntax(&self) -> MarkerSyntax {
        match self {
            Self::TabularPlain => MarkerSyntax::Strict,
            Self::TabularSlotted | Self::TaggedMarkup => MarkerSyntax::Lenient,
        }
    }

    fn rules(&self) -> &'static [Rule] {
        match self {
            Self::TabularPlain => &tabular::PLAIN_RULES[..],
            Self::TabularSlotted => &tabular::SLOTTED_RULES[..],
            Self::TaggedMarkup => &markup::MARKUP_RULES[..],
        }
    }

    /// Encode one segment of a card.
    pub fn transform_text(&self, raw: &str) -> Side {
        let syntax = self.marker_syntax();
        let media = media::resolve(raw, syntax);

        let text = match self {
            Self::TaggedMarkup => apply_all(self.rules(), &escape_markup(raw)),
            _ => apply_all(self.rules(), raw),
        };

        let text = match self {
            Self::TabularPlain => {
                media::rewrite_markers(&text, syntax, |name| format!(r#"<img src="{}">"#, name))
            }
            Self::TabularSlotted => media::strip_markers(&text, syntax).trim().to_string(),
            Self::TaggedMarkup => {
                media::rewrite_markers(&text, syntax, |name| format!(r#"<img id="{}" />"#, name))
            }
        };

        Side { text, media }
    }
}

/// Encode a card for one dialect.
pub fn transform(card: &RawCard, dialect: Dialect, config: &ExportConfig) -> TransformedCard {
    TransformedCard {
        id: card.id.clone(),
        tags: config.tags_for(&card.id),
        front: dialect.transform_text(&card.question),
        back: dialect.transform_text(&card.answer),
    }
}

/// Encode every card, keeping document order.
pub fn transform_all(
    cards: &[RawCard],
    dialect: Dialect,
    config: &ExportConfig,
) -> Vec<TransformedCard> {
    cards
        .iter()
        .map(|card| transform(card, dialect, config))
        .collect()
}
