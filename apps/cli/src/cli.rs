//! Command-line arguments.

use clap::{Parser, ValueEnum};
use drill_core::{Dialect, ExportConfig};
use std::path::PathBuf;

/// Which packages to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Anki CSV: front, back, tags
    Csv,
    /// AnkiApp CSV with one image column per side
    Slotted,
    /// AnkiApp deck XML with hashed image blobs
    Xml,
    /// Every format above
    All,
}

impl Format {
    pub fn dialects(self) -> Vec<Dialect> {
        match self {
            Self::Csv => vec![Dialect::TabularPlain],
            Self::Slotted => vec![Dialect::TabularSlotted],
            Self::Xml => vec![Dialect::TaggedMarkup],
            Self::All => Dialect::ALL.to_vec(),
        }
    }
}

/// Convert org-drill exam decks into Anki and AnkiApp import packages.
#[derive(Debug, Parser)]
#[command(name = "drill-export", version)]
pub struct Args {
    /// Org file holding the drill cards
    pub input: PathBuf,

    /// Directory that receives the generated files
    pub output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::All)]
    pub format: Format,

    /// Directory holding the referenced images [default: <input dir>/images]
    #[arg(long, env = "DRILL_IMAGES_DIR")]
    pub images: Option<PathBuf>,

    /// Deck name written into the XML deck and the preview
    #[arg(long, env = "DRILL_DECK_NAME")]
    pub deck_name: Option<String>,

    /// Deck-level tags of the XML deck
    #[arg(long, env = "DRILL_DECK_TAGS")]
    pub deck_tags: Option<String>,

    /// Tag attached to every card
    #[arg(long, env = "DRILL_CATEGORY_TAG")]
    pub category_tag: Option<String>,

    /// Prefix of the per-card tag
    #[arg(long, env = "DRILL_TAG_PREFIX")]
    pub tag_prefix: Option<String>,

    /// Number of cards written to the sample files
    #[arg(long, env = "DRILL_SAMPLE_COUNT")]
    pub sample_count: Option<usize>,

    /// Print the converted cards as JSON on stdout
    #[arg(long)]
    pub dump_cards: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Defaults overridden by whatever flags or env vars were given.
    pub fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::default();
        if let Some(name) = &self.deck_name {
            config.deck_name = name.clone();
        }
        if let Some(tags) = &self.deck_tags {
            config.deck_tags = tags.clone();
        }
        if let Some(tag) = &self.category_tag {
            config.category_tag = tag.clone();
        }
        if let Some(prefix) = &self.tag_prefix {
            config.tag_prefix = prefix.clone();
        }
        if let Some(count) = self.sample_count {
            config.sample_count = count;
        }
        config
    }

    pub fn images_dir(&self) -> PathBuf {
        self.images.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."))
                .join("images")
        })
    }
}
