//! Image reference resolution.
//!
//! Markers look like `[[./images/7.png]]`. The strict syntax requires the
//! `./images/` prefix and a numeric stem; the lenient one accepts an
//! optional prefix and stems made of word characters and hyphens.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};

static STRICT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[\./images/(\d+)\.png\]\]").unwrap());

static LENIENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[\.?/?(?:images/)?([\w-]+)\.png\]\]").unwrap());

static ASSET_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<img id="([^"]+)" />"#).unwrap());

/// Image extension appended to every resolved stem.
pub const IMAGE_EXTENSION: &str = "png";

/// Which marker spelling a dialect accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSyntax {
    Strict,
    Lenient,
}

impl MarkerSyntax {
    fn regex(self) -> &'static Regex {
        match self {
            Self::Strict => &*STRICT_MARKER,
            Self::Lenient => &*LENIENT_MARKER,
        }
    }
}

fn filename(stem: &str) -> String {
    format!("{}.{}", stem, IMAGE_EXTENSION)
}

/// Referenced filenames in order of first appearance, without duplicates.
///
/// Does not check that the files exist.
pub fn resolve(text: &str, syntax: MarkerSyntax) -> Vec<String> {
    let mut seen = HashSet::new();
    syntax
        .regex()
        .captures_iter(text)
        .map(|caps| filename(&caps[1]))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Replace every marker with whatever `render` returns for its filename.
pub fn rewrite_markers<F>(text: &str, syntax: MarkerSyntax, mut render: F) -> String
where
    F: FnMut(&str) -> String,
{
    syntax
        .regex()
        .replace_all(text, |caps: &Captures<'_>| render(&filename(&caps[1])))
        .into_owned()
}

/// Remove every marker from the text.
pub fn strip_markers(text: &str, syntax: MarkerSyntax) -> String {
    rewrite_markers(text, syntax, |_| String::new())
}

/// Point inline asset tags at content hashes.
///
/// `hashes` maps filename stems (`"7"`) to the hash of the file's bytes.
/// Tags whose id is not a known stem, with or without the image extension,
/// are left as they are.
pub fn substitute_hashes(text: &str, hashes: &HashMap<String, String>) -> String {
    ASSET_TAG
        .replace_all(text, |caps: &Captures<'_>| {
            match hashes.get(stem(&caps[1])) {
                Some(hash) => format!(r#"<img id="{}" />"#, hash),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Split a filename into its stem, dropping the image extension.
pub fn stem(filename: &str) -> &str {
    filename
        .strip_suffix(IMAGE_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(filename)
}
