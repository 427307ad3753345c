// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content fingerprinting over the declared build inputs.
//!
//! A pure function of filesystem state: files in declared order, then
//! each directory expanded recursively in lexicographic path order, all
//! folded into one SHA-256 digest. Modification times and ownership
//! never contribute.

use dh_core::{ComposeConfig, Fingerprint};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::EngineError;

/// Computes a stable digest over the files and directories that
/// influence container build output.
#[derive(Debug, Clone)]
pub struct ContentFingerprinter {
    root: PathBuf,
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
}

impl ContentFingerprinter {
    pub fn new(root: impl Into<PathBuf>, files: Vec<PathBuf>, directories: Vec<PathBuf>) -> Self {
        Self { root: root.into(), files, directories }
    }

    pub fn from_config(config: &ComposeConfig) -> Self {
        let inputs = config.fingerprint_inputs();
        Self::new(config.root.clone(), inputs.files, inputs.directories)
    }

    /// Compute the fingerprint for the current filesystem state.
    ///
    /// A missing declared input aborts with `MissingInput`; no partial
    /// fingerprint is ever produced.
    pub fn fingerprint(&self) -> Result<Fingerprint, EngineError> {
        let mut digest = Sha256::new();
        for file in &self.files {
            let absolute = self.root.join(file);
            if !absolute.is_file() {
                return Err(EngineError::MissingInput { path: absolute });
            }
            fold_file(&mut digest, file, &absolute)?;
        }
        for directory in &self.directories {
            let absolute = self.root.join(directory);
            if !absolute.is_dir() {
                return Err(EngineError::MissingInput { path: absolute });
            }
            for entry in WalkDir::new(&absolute).sort_by_file_name() {
                let entry = entry.map_err(|e| walk_error(&absolute, e))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let relative =
                    entry.path().strip_prefix(&self.root).unwrap_or_else(|_| entry.path());
                fold_file(&mut digest, relative, entry.path())?;
            }
        }
        Ok(Fingerprint::from_hex(format!("{:x}", digest.finalize())))
    }
}

/// Fold one file's path and content into the digest.
///
/// The path, a separator, and the content length all contribute, so a
/// renamed file changes the digest and adjacent contents cannot alias
/// across file boundaries.
fn fold_file(digest: &mut Sha256, relative: &Path, absolute: &Path) -> Result<(), EngineError> {
    let bytes = std::fs::read(absolute).map_err(|source| EngineError::io(absolute, source))?;
    digest.update(relative.to_string_lossy().as_bytes());
    digest.update([0u8]);
    digest.update((bytes.len() as u64).to_le_bytes());
    digest.update(&bytes);
    Ok(())
}

fn walk_error(directory: &Path, error: walkdir::Error) -> EngineError {
    let path = error.path().map(Path::to_path_buf).unwrap_or_else(|| directory.to_path_buf());
    match error.into_io_error() {
        Some(source) => EngineError::io(path, source),
        None => EngineError::MissingInput { path },
    }
}

#[cfg(test)]
#[path = "hasher_tests.rs"]
mod tests;
