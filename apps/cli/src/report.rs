//! Plain-text reports written next to each export.

use crate::package::assets::AssetCopy;
use drill_core::{Dialect, ExportConfig, Extraction, SkippedCard, TransformedCard, ValidationReport};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

/// JSON printed by `--dump-cards` for one dialect.
#[derive(Debug, Serialize)]
pub struct CardDump<'a> {
    pub dialect: Dialect,
    pub config: &'a ExportConfig,
    pub cards: Vec<TransformedCard>,
    pub skipped: &'a [SkippedCard],
}

/// First `count` cards, front and back, for a quick review before import.
pub fn sample_cards(cards: &[TransformedCard], count: usize) -> String {
    let mut out = String::new();
    for card in cards.iter().take(count) {
        let _ = writeln!(out, "==== CARD {} ====", card.id);
        let _ = writeln!(out, "FRONT:\n{}\n", card.front.text);
        let _ = writeln!(out, "BACK:\n{}\n", card.back.text);
        let _ = writeln!(out, "{}\n", "=".repeat(40));
    }
    out
}

/// Files the user must copy into Anki's media folder by hand.
pub fn media_files_needed(media: &BTreeSet<String>) -> String {
    let mut out = String::new();
    out.push_str("Media Files Required for Anki Import\n");
    out.push_str("===================================\n\n");
    let _ = writeln!(out, "Total files needed: {}\n", media.len());
    out.push_str("These files must be manually copied to your Anki collection.media directory:\n\n");
    for name in media {
        let _ = writeln!(out, "- {}", name);
    }
    out.push_str("\nIMPORTANT: Do not create subdirectories in the collection.media folder.\n");
    out.push_str("Simply copy all files directly into that directory.\n");
    out
}

/// Which referenced images were found and which were not.
pub fn image_report(assets: &AssetCopy) -> String {
    let mut out = String::new();
    out.push_str("# Image Processing Report\n\n");

    out.push_str("## Successfully Processed Images\n\n");
    if assets.copied.is_empty() {
        out.push_str("No images were successfully processed.\n");
    }
    for name in &assets.copied {
        let _ = writeln!(out, "- {}", name);
    }

    out.push_str("\n## Missing Images\n\n");
    if assets.missing.is_empty() {
        out.push_str("All referenced images were found and processed successfully.\n");
    } else {
        out.push_str(
            "The following image references were found but the image files were not located:\n\n",
        );
        for name in &assets.missing {
            let _ = writeln!(out, "- {}", name);
        }
    }

    out.push_str("\n## Troubleshooting\n\n");
    out.push_str("If images are missing:\n");
    out.push_str("1. Ensure the \"images\" directory is in the same location as the source org file\n");
    out.push_str("   (or pass --images)\n");
    out.push_str("2. Check that image filenames match the references in the org file\n");
    out
}

/// Log extraction skips and validation findings.
pub fn log_extraction(extraction: &Extraction) {
    tracing::info!(
        "found {} card headers, extracted {} cards",
        extraction.headers_seen(),
        extraction.cards.len()
    );
    for skipped in &extraction.skipped {
        tracing::warn!(
            "card {} at line {} skipped: {:?}",
            skipped.id,
            skipped.line_number,
            skipped.reason
        );
    }
}

pub fn log_validation(dialect: &str, report: &ValidationReport) {
    tracing::info!(
        dialect,
        "validated {} cards, {} media references",
        report.total_cards,
        report.media_references
    );
    for warning in &report.warnings {
        tracing::warn!(dialect, "{}", warning.message());
    }
    if report.latex_issues() > 0 {
        tracing::warn!(
            dialect,
            "{} cards may have LaTeX formatting issues",
            report.latex_issues()
        );
    }
}
