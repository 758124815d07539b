use anyhow::{Context, Result};
use log::trace;
use sha1::{Digest, Sha1};
use std::{io, path::Path};

use crate::fsio::FileReader;

/// Lowercase hex SHA-1 of an in-memory byte buffer.
pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Streams `path` through SHA-1 without materializing the whole file.
///
/// `enabled == false` means the caller did not ask for a fingerprint:
/// returns `Ok(None)` and performs no I/O at all. The digest is over the
/// exact byte sequence, so binary and text content hash identically.
pub fn hash_file(files: &dyn FileReader, path: &Path, enabled: bool) -> Result<Option<String>> {
    if !enabled {
        return Ok(None);
    }
    trace!("Hashing {}", path.display());
    let mut reader =
        files.open(path).with_context(|| format!("Cannot read path '{}'.", path.display()))?;
    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher)
        .with_context(|| format!("Cannot read path '{}'.", path.display()))?;
    Ok(Some(hex::encode(hasher.finalize())))
}
