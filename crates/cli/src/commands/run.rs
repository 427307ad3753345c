// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run command handler

use anyhow::Result;
use std::path::Path;
use std::time::Duration;

use dh_adapters::SystemRunner;
use dh_engine::{CommandDispatcher, EngineError};

use crate::exit_error::ExitError;

/// Dispatch a command into a service, exec-ing into a running container
/// or spinning up a one-off. The child's output already streamed to the
/// terminal, so its failure exits with the child's code and no message.
pub fn handle(
    project_dir: &Path,
    service: &str,
    command: &[String],
    options: &[String],
    timeout_secs: Option<u64>,
) -> Result<()> {
    let config = super::load_config(project_dir)?;
    let dispatcher = CommandDispatcher::new(config, SystemRunner::new());
    let timeout = timeout_secs.map(Duration::from_secs);
    match dispatcher.run_or_exec(service, command, options, timeout) {
        Ok(_) => Ok(()),
        Err(error @ EngineError::CommandFailed { .. }) => {
            Err(ExitError::silent(error.exit_code()).into())
        }
        Err(error) => Err(super::failure(error)),
    }
}
