//! Core conversion pipeline for org-drill exam decks.
//!
//! Provides:
//! - Card extractor for `:drill:` headings split by a `****` divider
//! - Content transformer with one rule table per output dialect
//! - Image reference resolver and content-hash substitution
//! - Post-conversion validation warnings
//!
//! Everything here works on in-memory strings; reading documents, hashing
//! files and writing packages is left to the caller.

pub mod config;
pub mod error;
pub mod extractor;
pub mod media;
pub mod transform;
pub mod types;
pub mod validation;

pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use extractor::{extract, extract_all, Cards, Extraction, SkipReason, SkippedCard};
pub use media::{resolve, substitute_hashes, MarkerSyntax};
pub use transform::{escape_markup, transform, transform_all};
pub use types::{Dialect, RawCard, Side, TransformedCard};
pub use validation::{validate, ValidationReport, Warning};

/// Extract every card, failing when the document holds none.
pub fn extract_nonempty(content: &str) -> Result<Extraction> {
    let extraction = extract_all(content);
    if extraction.cards.is_empty() {
        return Err(ExportError::NoCards);
    }
    Ok(extraction)
}
