//! SHA-256 content hashes for image blobs.

use crate::error::{PackageError, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Hex SHA-256 of a byte slice.
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Hex SHA-256 of a file's bytes, read in chunks.
pub fn hash_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(PackageError::io(path))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(PackageError::io(path))?;
    Ok(format!("{:x}", hasher.finalize()))
}
