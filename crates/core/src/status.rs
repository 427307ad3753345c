// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container status snapshots parsed from `docker compose ps --format json`.
//!
//! Status is derived, never stored: every caller re-queries the engine
//! because the answer can change between observations. Parsing works on
//! compose's structured output rather than grepping human-readable text,
//! so locale and column-format changes cannot break the state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time state of one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerStatus {
    NotRunning,
    Unhealthy,
    Healthy,
}

impl ContainerStatus {
    /// Running in any health state — sufficient for `exec`.
    pub fn is_running(&self) -> bool {
        !matches!(self, ContainerStatus::NotRunning)
    }

    /// Running and reporting healthy — required before dependent work starts.
    pub fn is_healthy(&self) -> bool {
        matches!(self, ContainerStatus::Healthy)
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerStatus::NotRunning => write!(f, "not running"),
            ContainerStatus::Unhealthy => write!(f, "unhealthy"),
            ContainerStatus::Healthy => write!(f, "healthy"),
        }
    }
}

/// One record from `docker compose ps --format json`.
///
/// Compose emits JSON-lines (one object per container) on current
/// versions and a single JSON array on older ones; [`parse_ps`] accepts
/// both. Only the fields the status mapping needs are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsEntry {
    #[serde(rename = "Service", default)]
    pub service: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Health", default)]
    pub health: String,
}

impl PsEntry {
    /// Map this record to a status snapshot.
    ///
    /// An empty `Health` means the service declares no healthcheck; a
    /// running container without one counts as healthy, otherwise waits
    /// on such services could never succeed.
    pub fn status(&self) -> ContainerStatus {
        if self.state != "running" {
            ContainerStatus::NotRunning
        } else if self.health.is_empty() || self.health == "healthy" {
            ContainerStatus::Healthy
        } else {
            ContainerStatus::Unhealthy
        }
    }
}

/// Parse `ps --format json` output, tolerating both JSON-lines and
/// array form. Unparseable lines are skipped; a service that produced
/// no record reads as not running either way.
pub fn parse_ps(output: &str) -> Vec<PsEntry> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).unwrap_or_default();
    }
    trimmed.lines().filter_map(|line| serde_json::from_str(line.trim()).ok()).collect()
}

/// Status of the named service within a parsed `ps` listing.
///
/// Matches on the compose service name, falling back to the container
/// name for callers that pass the fully-qualified form.
pub fn status_for(entries: &[PsEntry], service: &str) -> ContainerStatus {
    entries
        .iter()
        .find(|e| e.service == service || e.name == service)
        .map(PsEntry::status)
        .unwrap_or(ContainerStatus::NotRunning)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
