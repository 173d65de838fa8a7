//! Delimited outputs: the 3-column Anki CSV and the 7-column slotted CSV.

use crate::error::Result;
use csv::{QuoteStyle, WriterBuilder};
use drill_core::TransformedCard;
use std::io::Write;

pub const PLAIN_HEADER: [&str; 3] = ["Front", "Back", "Tags"];

pub const SLOTTED_HEADER: [&str; 7] = [
    "Front",
    "Back",
    "Tags",
    "Front Image",
    "Back Image",
    "Front Audio",
    "Back Audio",
];

/// Write front, back and tags with every field quoted.
pub fn write_plain<W: Write>(writer: W, cards: &[TransformedCard]) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(PLAIN_HEADER)?;
    for card in cards {
        csv.write_record([
            card.front.text.as_str(),
            card.back.text.as_str(),
            card.tags_field().as_str(),
        ])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write the slotted layout. Each side gets its first image; audio is empty.
pub fn write_slotted<W: Write>(writer: W, cards: &[TransformedCard]) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(SLOTTED_HEADER)?;
    for card in cards {
        let tags = card.tags_field();
        csv.write_record([
            card.front.text.as_str(),
            card.back.text.as_str(),
            tags.as_str(),
            card.front.slot().unwrap_or_default(),
            card.back.slot().unwrap_or_default(),
            "",
            "",
        ])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}
