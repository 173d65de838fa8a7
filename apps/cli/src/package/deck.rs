//! Deck XML document: a `deck` with a `fields` declaration and `cards`.

use drill_core::{escape_markup, ExportConfig, TransformedCard};
use std::fmt::Write;

/// Render the deck document for cards already in the markup dialect.
pub fn render_deck(cards: &[TransformedCard], config: &ExportConfig) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        xml,
        r#"<deck name="{}" tags="{}">"#,
        escape_markup(&config.deck_name),
        escape_markup(&config.deck_tags)
    );

    xml.push_str("  <fields>\n");
    xml.push_str("    <rich-text lang=\"en-US\" name=\"Front\" sides=\"11\"></rich-text>\n");
    xml.push_str("    <rich-text lang=\"en-US\" name=\"Back\" sides=\"01\"></rich-text>\n");
    xml.push_str("  </fields>\n");

    xml.push_str("  <cards>\n");
    for card in cards {
        let _ = writeln!(xml, r#"    <card tags="{}">"#, escape_markup(&card.tags_field()));
        let _ = writeln!(xml, r#"      <rich-text name="Front">{}</rich-text>"#, card.front.text);
        let _ = writeln!(xml, r#"      <rich-text name="Back">{}</rich-text>"#, card.back.text);
        xml.push_str("    </card>\n");
    }
    xml.push_str("  </cards>\n");
    xml.push_str("</deck>\n");

    xml
}

/// Check that a produced document is well-formed.
///
/// Returns the parser's message on failure; callers warn rather than abort.
pub fn check_well_formed(xml: &str) -> Result<(), String> {
    roxmltree::Document::parse(xml)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
