//! # Content hashing module
//!
//! Produces the hashed, versioned names that substituted references point
//! at. Digests are SHA-256 over file contents, truncated to a short hex
//! prefix and cached per path, so a file referenced from many documents is
//! read and hashed once per run.

use std::fs;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use sha2::{Digest, Sha256};

use crate::core::RevstaticError;

/// Hex characters of the content digest carried in hashed filenames
pub const HASH_LENGTH: usize = 8;

/// Inserts a digest into a path right before the filename's extension:
/// `assets/pic.jpg` becomes `assets/pic.a1b2c3d4.jpg`. Filenames without an
/// extension get the digest appended as a suffix.
pub fn splice_digest(reference: &str, digest: &str) -> String {
    let name_start = reference.rfind('/').map(|i| i + 1).unwrap_or(0);

    let insert_at = match reference[name_start..].rfind('.') {
        Some(0) | None => reference.len(),
        Some(i) => name_start + i,
    };

    let mut result = String::with_capacity(reference.len() + digest.len() + 1);
    result.push_str(&reference[..insert_at]);
    result.push('.');
    result.push_str(digest);
    result.push_str(&reference[insert_at..]);
    result
}

/// Computes and caches content digests for referenced assets
pub struct AssetHasher {
    digests: DashMap<PathBuf, String>,
}

impl AssetHasher {
    pub fn new() -> AssetHasher {
        AssetHasher {
            digests: DashMap::new(),
        }
    }

    /// Truncated hex SHA-256 digest of the file at `path`; cached, so the
    /// answer is stable for the rest of the run even if the file changes
    pub fn digest(&self, path: &Path) -> Result<String, RevstaticError> {
        if let Some(digest) = self.digests.get(path) {
            return Ok(digest.clone());
        }

        let data = fs::read(path).map_err(|source| RevstaticError::HashFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&data);
        let digest: String = hasher
            .finalize()
            .iter()
            .take(HASH_LENGTH / 2)
            .map(|byte| format!("{byte:02x}"))
            .collect();

        self.digests.insert(path.to_path_buf(), digest.clone());
        Ok(digest)
    }

    /// Rewrites a reference's path portion to its hashed form, preserving
    /// the directory prefix exactly as the document spelled it
    pub fn hashed_url(&self, written_path: &str, path: &Path) -> Result<String, RevstaticError> {
        let digest = self.digest(path)?;
        Ok(splice_digest(written_path, &digest))
    }

    /// On-disk filename for the hashed copy of `path`
    pub fn hashed_file_name(&self, path: &Path) -> Result<String, RevstaticError> {
        let digest = self.digest(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(splice_digest(&name, &digest))
    }
}

impl Default for AssetHasher {
    fn default() -> Self {
        Self::new()
    }
}
