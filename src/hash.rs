//! Bundle hash policy and content hashing.

use namer_config::{Config, HashingMode};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::error::{NamerError, NamerResult};
use crate::host::Bundle;

/// Number of hex characters of the content digest used in names
pub const HASH_LENGTH: usize = 6;

/// Decide which hash, if any, goes into the bundle's name.
///
/// Empty string means no hash. Evaluated per request; bundle content may
/// change between requests.
pub fn bundle_hash(config: &Config, bundle: &dyn Bundle) -> NamerResult<String> {
    if config.hashing == HashingMode::Never {
        return Ok(String::new());
    }

    if config.use_parcel_hash {
        if let Some(reference) = bundle.hash_reference() {
            return Ok(reference.to_string());
        }
    }

    if config.hashing != HashingMode::Always {
        return Ok(String::new());
    }

    content_hash(bundle)
}

/// SHA-256 over `path:digest` of every file-backed asset in traversal
/// order, truncated to [`HASH_LENGTH`] hex characters.
pub fn content_hash(bundle: &dyn Bundle) -> NamerResult<String> {
    let mut hasher = Sha256::new();

    for asset in bundle.assets() {
        let Some(path) = asset.file_path else {
            continue;
        };
        let digest = file_digest(&path)?;
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update(b":");
        hasher.update(digest.as_bytes());
    }

    let mut hash = hex::encode(hasher.finalize());
    hash.truncate(HASH_LENGTH);
    tracing::debug!(bundle = bundle.id(), hash = %hash, "computed content hash");
    Ok(hash)
}

fn file_digest(path: &Path) -> NamerResult<String> {
    let bytes = fs::read(path).map_err(|e| NamerError::AssetRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
