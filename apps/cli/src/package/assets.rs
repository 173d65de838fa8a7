//! Image assets: copying referenced files, content-addressed blobs and the
//! import archive.

use crate::error::{PackageError, Result};
use crate::hashing::hash_file;
use drill_core::media;
use drill_core::TransformedCard;
use std::collections::{BTreeSet, HashMap};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Outcome of looking referenced files up in the image directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCopy {
    pub copied: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl AssetCopy {
    /// Fold another lookup into this one.
    pub fn extend(&mut self, other: AssetCopy) {
        self.copied.extend(other.copied);
        self.missing.extend(other.missing);
    }
}

/// Every distinct image referenced by a set of cards, sorted.
pub fn referenced_media(cards: &[TransformedCard]) -> BTreeSet<String> {
    cards
        .iter()
        .flat_map(|card| card.all_media())
        .map(str::to_string)
        .collect()
}

/// Copy each referenced file from `source` into `dest`.
///
/// Missing files are recorded, not treated as errors.
pub fn copy_assets<'a, I>(names: I, source: &Path, dest: &Path) -> Result<AssetCopy>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut outcome = AssetCopy::default();
    fs::create_dir_all(dest).map_err(PackageError::io(dest))?;

    for name in names {
        let from = source.join(name);
        if from.is_file() {
            let to = dest.join(name);
            fs::copy(&from, &to).map_err(PackageError::io(&to))?;
            outcome.copied.insert(name.clone());
        } else {
            tracing::warn!("{} not found in {}", name, source.display());
            outcome.missing.insert(name.clone());
        }
    }

    Ok(outcome)
}

/// Blobs staged for the deck archive.
#[derive(Debug, Clone, Default)]
pub struct BlobStore {
    /// Filename stem to hex SHA-256 of the file's bytes.
    pub hashes: HashMap<String, String>,
    pub assets: AssetCopy,
}

/// Copy each referenced image into `blobs_dir` under its original name, its
/// bare hash and its hash plus extension.
pub fn stage_blobs<'a, I>(names: I, source: &Path, blobs_dir: &Path) -> Result<BlobStore>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut store = BlobStore::default();
    fs::create_dir_all(blobs_dir).map_err(PackageError::io(blobs_dir))?;

    for name in names {
        let from = source.join(name);
        if !from.is_file() {
            tracing::warn!("{} not found in {}", name, source.display());
            store.assets.missing.insert(name.clone());
            continue;
        }

        let hash = hash_file(&from)?;
        let extension = Path::new(name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        for target in [name.clone(), hash.clone(), format!("{}{}", hash, extension)] {
            let to = blobs_dir.join(target);
            fs::copy(&from, &to).map_err(PackageError::io(&to))?;
        }

        tracing::debug!(file = %name, %hash, "staged blob");
        store.hashes.insert(media::stem(name).to_string(), hash);
        store.assets.copied.insert(name.clone());
    }

    tracing::info!(
        "staged {} unique assets as blobs ({} missing)",
        store.assets.copied.len(),
        store.assets.missing.len()
    );
    Ok(store)
}

/// Build the import archive: the deck XML at the root and every file of
/// `blobs_dir` under `blobs/`.
///
/// Returns the archive's entry names.
pub fn write_archive(zip_path: &Path, xml_path: &Path, blobs_dir: &Path) -> Result<Vec<String>> {
    let file = File::create(zip_path).map_err(PackageError::io(zip_path))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::new();

    let xml_name = xml_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "anki_import.xml".to_string());
    add_file(&mut zip, &xml_name, xml_path, options)?;
    entries.push(xml_name);

    if blobs_dir.is_dir() {
        let mut blobs: Vec<_> = fs::read_dir(blobs_dir)
            .map_err(PackageError::io(blobs_dir))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        blobs.sort();

        for path in blobs {
            let name = format!("blobs/{}", path.file_name().unwrap_or_default().to_string_lossy());
            add_file(&mut zip, &name, &path, options)?;
            entries.push(name);
        }
    }

    zip.finish()?;
    Ok(entries)
}

fn add_file<W: Write + io::Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    path: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    let mut source = File::open(path).map_err(PackageError::io(path))?;
    zip.start_file(name, options)?;
    io::copy(&mut source, zip).map_err(PackageError::io(path))?;
    Ok(())
}
