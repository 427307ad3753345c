// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exec-vs-run routing for user commands.
//!
//! A running container (healthy or not) gets `exec`; anything else gets
//! a fresh one-off `run`. The decision is re-made on every call because
//! the container can start or stop between invocations.

use dh_adapters::compose;
use dh_adapters::subprocess::{ProcessRunner, RunOptions, RunOutput};
use dh_core::ComposeConfig;
use std::time::Duration;

use crate::error::EngineError;
use crate::probe::StatusProbe;

pub struct CommandDispatcher<R: ProcessRunner> {
    config: ComposeConfig,
    runner: R,
    probe: StatusProbe<R>,
}

impl<R: ProcessRunner> CommandDispatcher<R> {
    pub fn new(config: ComposeConfig, runner: R) -> Self {
        let probe = StatusProbe::new(config.clone(), runner.clone());
        Self { config, runner, probe }
    }

    /// Run `command` in `service`: `exec` into the running container, or
    /// `run` a fresh one-off container when it is not running.
    ///
    /// Output streams to the operator's terminal. A nonzero exit from
    /// the dispatched command is returned as `CommandFailed` so the
    /// caller can surface the child's exit code.
    pub fn run_or_exec(
        &self,
        service: &str,
        command: &[String],
        options: &[String],
        timeout: Option<Duration>,
    ) -> Result<RunOutput, EngineError> {
        let status = self.probe.status(service)?;
        let dispatched = if status.is_running() {
            tracing::debug!(service, %status, "container running, dispatching exec");
            compose::exec(&self.config, service, options, command)
        } else {
            tracing::debug!(service, "container not running, dispatching one-off run");
            compose::run(&self.config, service, options, command)
        };

        let mut run_options = RunOptions::streamed(&self.config.root);
        if let Some(timeout) = timeout {
            run_options = run_options.with_timeout(timeout);
        }
        let output = self.runner.run(&dispatched, &run_options)?;
        if output.success() {
            Ok(output)
        } else {
            Err(EngineError::command_failed(&dispatched, &output))
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
