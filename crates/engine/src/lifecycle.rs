// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container lifecycle orchestration: build gate, start/attach, and the
//! wait-for-healthy state machine with its auto-start fallback.

use dh_adapters::compose;
use dh_adapters::notify::Notifier;
use dh_adapters::subprocess::{CommandLine, ProcessRunner, RunOptions, RunOutput};
use dh_core::{Clock, ComposeConfig, ComposeTarget, ContainerStatus};
use std::time::Duration;

use crate::error::EngineError;
use crate::gate::{BuildDecision, BuildGate};
use crate::poller::{PollOutcome, ReadinessPoller};
use crate::probe::StatusProbe;

/// Interval between health probes. Human-scale container startup; not
/// configurable in this scope.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// How `start` should hand the containers to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Replace this process with `compose up` — never returns on success.
    Attach,
    /// `compose up -d`, returning control normally.
    Detached,
}

/// Result of a `start` call. Attach has no variant: its success path
/// replaces the process image and cannot return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Detached,
}

pub struct LifecycleManager<R: ProcessRunner, C: Clock, N: Notifier> {
    config: ComposeConfig,
    runner: R,
    probe: StatusProbe<R>,
    poller: ReadinessPoller<C>,
    notifier: N,
}

impl<R: ProcessRunner, C: Clock, N: Notifier> LifecycleManager<R, C, N> {
    pub fn new(config: ComposeConfig, runner: R, clock: C, notifier: N) -> Self {
        let probe = StatusProbe::new(config.clone(), runner.clone());
        let poller = ReadinessPoller::new(clock, HEALTH_POLL_INTERVAL);
        Self { config, runner, probe, poller, notifier }
    }

    pub fn probe(&self) -> &StatusProbe<R> {
        &self.probe
    }

    /// Run the image build unless the input fingerprint is already
    /// recorded as built.
    pub fn ensure_built(&self) -> Result<BuildDecision, EngineError> {
        BuildGate::for_config(&self.config).ensure_built(|| self.run_build())
    }

    /// Run the image build unconditionally, recording the fingerprint on
    /// success.
    pub fn force_build(&self) -> Result<(), EngineError> {
        BuildGate::for_config(&self.config).rebuild(|| self.run_build())
    }

    /// Start containers after the build gate. `Attach` replaces the
    /// process image; `Detached` starts in the background and returns.
    pub fn start(
        &self,
        target: &ComposeTarget,
        mode: StartMode,
    ) -> Result<StartOutcome, EngineError> {
        self.ensure_built()?;
        match mode {
            StartMode::Detached => {
                let command = compose::up(&self.config, target, true);
                self.checked(&command, &RunOptions::quiet(&self.config.root))?;
                tracing::info!(%target, "containers started");
                Ok(StartOutcome::Detached)
            }
            StartMode::Attach => {
                let command = compose::up(&self.config, target, false);
                match self.runner.exec_replace(&command, &self.config.root) {
                    Ok(never) => match never {},
                    Err(error) => Err(error.into()),
                }
            }
        }
    }

    /// Wait until `service` reports healthy, auto-starting it when it is
    /// not running at all.
    ///
    /// Returns whether health was actually observed within `timeout`;
    /// a timed-out wait is `Ok(false)`, not an error.
    pub fn wait_for_healthy(&self, service: &str, timeout: Duration) -> Result<bool, EngineError> {
        if self.probe.status(service)? == ContainerStatus::NotRunning {
            self.notifier.note(&format!("starting required container {}", service));
            self.ensure_built()?;
            let command =
                compose::up(&self.config, &ComposeTarget::service(service), true);
            self.checked(&command, &RunOptions::quiet(&self.config.root))?;
        }

        let outcome = self.poller.wait_for(
            || match self.probe.status(service) {
                Ok(status) => status.is_healthy(),
                Err(error) => {
                    // within the budget a failed probe just means "not yet ready"
                    tracing::debug!(service, %error, "health probe failed");
                    false
                }
            },
            timeout,
        );
        Ok(outcome == PollOutcome::Satisfied)
    }

    /// The actual build action behind the gate: optional base image via
    /// `docker build`, then `docker compose build`. Output streams to
    /// the operator; a nonzero exit is a build failure.
    fn run_build(&self) -> Result<(), EngineError> {
        if let Some(image) = &self.config.image {
            tracing::info!(tag = %image.tag, "building base image");
            let command = compose::docker_build(image);
            self.build_step(&command)?;
        }
        let command = compose::build(&self.config);
        self.build_step(&command)
    }

    fn build_step(&self, command: &CommandLine) -> Result<(), EngineError> {
        let output = self.runner.run(command, &RunOptions::streamed(&self.config.root))?;
        if output.success() {
            Ok(())
        } else {
            Err(EngineError::BuildFailed { code: output.code })
        }
    }

    fn checked(
        &self,
        command: &CommandLine,
        options: &RunOptions,
    ) -> Result<RunOutput, EngineError> {
        let output = self.runner.run(command, options)?;
        if output.success() {
            Ok(output)
        } else {
            Err(EngineError::command_failed(command, &output))
        }
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
