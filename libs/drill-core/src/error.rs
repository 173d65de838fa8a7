//! Error types for drill-core.

use thiserror::Error;

/// Result type alias using ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors surfaced to callers of the conversion pipeline.
///
/// Extraction and transformation never fail on malformed text; these cover
/// the conditions a caller must decide about.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("no drill cards found in the input; check the header format")]
    NoCards,
}
