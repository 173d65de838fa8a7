//! Writing import packages for each dialect.

pub mod assets;
pub mod deck;
pub mod tabular;

use crate::error::{PackageError, Result};
use crate::instructions::instructions;
use crate::preview::{render_preview, PREVIEW_IMAGES_DIR};
use crate::report;
use assets::AssetCopy;
use drill_core::{
    substitute_hashes, transform_all, validate, Dialect, ExportConfig, RawCard, TransformedCard,
};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Files produced for one dialect.
#[derive(Debug, Clone, Default)]
pub struct ExportOutcome {
    pub files: Vec<PathBuf>,
    pub cards: usize,
    pub assets: AssetCopy,
    /// Set when the deck XML failed the well-formedness check.
    pub malformed: Option<String>,
}

/// Writes every output of a dialect into one directory.
pub struct Exporter<'a> {
    pub output_dir: &'a Path,
    pub images_dir: &'a Path,
    pub config: &'a ExportConfig,
}

impl Exporter<'_> {
    fn path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    fn write_text(&self, name: &str, content: &str, outcome: &mut ExportOutcome) -> Result<()> {
        let path = self.path(name);
        fs::write(&path, content).map_err(PackageError::io(&path))?;
        tracing::info!("created {}", path.display());
        outcome.files.push(path);
        Ok(())
    }

    fn create(&self, name: &str) -> Result<(PathBuf, BufWriter<File>)> {
        let path = self.path(name);
        let file = File::create(&path).map_err(PackageError::io(&path))?;
        Ok((path, BufWriter::new(file)))
    }

    /// Transform, validate and package the cards for one dialect.
    pub fn export(&self, dialect: Dialect, cards: &[RawCard]) -> Result<ExportOutcome> {
        fs::create_dir_all(self.output_dir).map_err(PackageError::io(self.output_dir))?;

        let transformed = transform_all(cards, dialect, self.config);
        let validation = validate(&transformed, self.config.short_front_threshold);
        report::log_validation(dialect.as_str(), &validation);

        let mut outcome = ExportOutcome {
            cards: transformed.len(),
            ..Default::default()
        };
        let media = assets::referenced_media(&transformed);

        match dialect {
            Dialect::TabularPlain => {
                let (path, writer) = self.create("anki_import.csv")?;
                tabular::write_plain(writer, &transformed)?;
                tracing::info!("created {} with {} cards", path.display(), transformed.len());
                outcome.files.push(path);

                self.write_text(
                    "media_files_needed.txt",
                    &report::media_files_needed(&media),
                    &mut outcome,
                )?;
            }
            Dialect::TabularSlotted => {
                let (path, writer) = self.create("ankiapp_import.csv")?;
                tabular::write_slotted(writer, &transformed)?;
                tracing::info!("created {} with {} cards", path.display(), transformed.len());
                outcome.files.push(path);

                if !media.is_empty() {
                    outcome.assets = assets::copy_assets(&media, self.images_dir, &self.path("media"))?;
                }
            }
            Dialect::TaggedMarkup => {
                self.export_deck(cards, &transformed, &media, &mut outcome)?;
            }
        }

        if !media.is_empty() && dialect != Dialect::TabularPlain {
            self.write_text(
                &format!("image_report_{}.txt", dialect),
                &report::image_report(&outcome.assets),
                &mut outcome,
            )?;
        }

        let (name, text) = instructions(dialect);
        self.write_text(name, text, &mut outcome)?;

        let samples = report::sample_cards(&transformed, self.config.sample_count);
        self.write_text(&format!("sample_cards_{}.txt", dialect), &samples, &mut outcome)?;

        Ok(outcome)
    }

    fn export_deck(
        &self,
        cards: &[RawCard],
        transformed: &[TransformedCard],
        media: &BTreeSet<String>,
        outcome: &mut ExportOutcome,
    ) -> Result<()> {
        let blobs_dir = self.path("blobs");
        let mut xml = deck::render_deck(transformed, self.config);

        if !media.is_empty() {
            tracing::info!("processing {} unique images for blob storage", media.len());
            let store = assets::stage_blobs(media, self.images_dir, &blobs_dir)?;
            xml = substitute_hashes(&xml, &store.hashes);
            outcome.assets.extend(store.assets);

            let preview_assets =
                assets::copy_assets(media, self.images_dir, &self.path(PREVIEW_IMAGES_DIR))?;
            outcome.assets.extend(preview_assets);
        }

        match deck::check_well_formed(&xml) {
            Ok(()) => tracing::info!("deck XML is well-formed"),
            Err(message) => {
                tracing::warn!("deck XML created but validation failed: {}", message);
                outcome.malformed = Some(message);
            }
        }

        let xml_path = self.path("anki_import.xml");
        fs::write(&xml_path, &xml).map_err(PackageError::io(&xml_path))?;
        tracing::info!("created {}", xml_path.display());
        outcome.files.push(xml_path.clone());

        let zip_path = self.path("anki_import.zip");
        let entries = assets::write_archive(&zip_path, &xml_path, &blobs_dir)?;
        tracing::info!(
            "created {} ({} blob files)",
            zip_path.display(),
            entries.iter().filter(|e| e.starts_with("blobs/")).count()
        );
        outcome.files.push(zip_path);

        self.write_text("preview.html", &render_preview(cards, self.config), outcome)?;
        Ok(())
    }
}
