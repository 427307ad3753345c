// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted record of fingerprints whose build already succeeded.
//!
//! One marker file per digest under the project state directory. Stale
//! records accumulate harmlessly; nothing requires pruning. Written only
//! by this process — concurrent multi-process writers are out of scope.

use dh_core::{ComposeConfig, Fingerprint};
use std::path::PathBuf;

use crate::error::EngineError;

pub struct FingerprintStore {
    dir: PathBuf,
}

impl FingerprintStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn for_config(config: &ComposeConfig) -> Self {
        Self::new(config.state_dir().join("builds"))
    }

    /// Point-in-time check: has a successful build been recorded for
    /// this fingerprint?
    pub fn exists(&self, fingerprint: &Fingerprint) -> bool {
        self.record_path(fingerprint).is_file()
    }

    /// Record a successful build. Idempotent: saving the same
    /// fingerprint twice neither errors nor changes `exists`.
    pub fn save(&self, fingerprint: &Fingerprint) -> Result<(), EngineError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| EngineError::io(&self.dir, e))?;
        let path = self.record_path(fingerprint);
        std::fs::write(&path, format!("{}\n", fingerprint.as_hex()))
            .map_err(|e| EngineError::io(&path, e))?;
        Ok(())
    }

    fn record_path(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.dir.join(fingerprint.as_hex())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
