// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The build gate: skip expensive image builds when nothing changed.
//!
//! Invariant: after `ensure_built` returns `Ok`, the current fingerprint
//! is recorded as built — whether or not a build actually ran. A failed
//! build is never recorded, so the next call retries it.

use dh_core::ComposeConfig;

use crate::error::EngineError;
use crate::hasher::ContentFingerprinter;
use crate::store::FingerprintStore;

/// What the gate did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildDecision {
    /// The fingerprint was new; the build action ran.
    Built,
    /// The fingerprint was already recorded; the build was skipped.
    Cached,
}

pub struct BuildGate {
    hasher: ContentFingerprinter,
    store: FingerprintStore,
}

impl BuildGate {
    pub fn new(hasher: ContentFingerprinter, store: FingerprintStore) -> Self {
        Self { hasher, store }
    }

    pub fn for_config(config: &ComposeConfig) -> Self {
        Self::new(ContentFingerprinter::from_config(config), FingerprintStore::for_config(config))
    }

    /// Run `build` unless the current fingerprint is already recorded.
    pub fn ensure_built<F>(&self, build: F) -> Result<BuildDecision, EngineError>
    where
        F: FnOnce() -> Result<(), EngineError>,
    {
        let fingerprint = self.hasher.fingerprint()?;
        if self.store.exists(&fingerprint) {
            tracing::debug!(fingerprint = fingerprint.short(), "build cache hit");
            return Ok(BuildDecision::Cached);
        }
        tracing::info!(fingerprint = fingerprint.short(), "build inputs changed, building");
        build()?;
        self.store.save(&fingerprint)?;
        Ok(BuildDecision::Built)
    }

    /// Run `build` unconditionally, then record the current fingerprint.
    pub fn rebuild<F>(&self, build: F) -> Result<(), EngineError>
    where
        F: FnOnce() -> Result<(), EngineError>,
    {
        let fingerprint = self.hasher.fingerprint()?;
        build()?;
        self.store.save(&fingerprint)
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
