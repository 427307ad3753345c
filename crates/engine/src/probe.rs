// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured container status queries.
//!
//! Every call shells out to `docker compose ps --format json` and parses
//! the records; the result is a snapshot and is never cached, because
//! external state can change between observations.

use dh_adapters::compose;
use dh_adapters::subprocess::ProcessRunner;
use dh_core::{parse_ps, status_for, ComposeConfig, ContainerStatus, PsEntry};

use crate::error::EngineError;

#[derive(Clone)]
pub struct StatusProbe<R: ProcessRunner> {
    config: ComposeConfig,
    runner: R,
}

impl<R: ProcessRunner> StatusProbe<R> {
    pub fn new(config: ComposeConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// All containers the compose project currently reports.
    pub fn entries(&self) -> Result<Vec<PsEntry>, EngineError> {
        let command = compose::ps_json(&self.config);
        let output = self.runner.capture(&command, &self.config.root)?;
        if !output.success() {
            return Err(EngineError::command_failed(&command, &output));
        }
        Ok(parse_ps(&output.stdout))
    }

    /// Fresh status snapshot for one service.
    pub fn status(&self, service: &str) -> Result<ContainerStatus, EngineError> {
        let status = status_for(&self.entries()?, service);
        tracing::debug!(service, %status, "status probe");
        Ok(status)
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
