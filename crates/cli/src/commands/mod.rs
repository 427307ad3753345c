// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod build;
pub mod logs;
pub mod run;
pub mod status;
pub mod up;
pub mod wait;

use anyhow::Result;
use std::path::Path;

use dh_adapters::{SystemRunner, TerminalNotifier};
use dh_core::{ComposeConfig, SystemClock};
use dh_engine::{EngineError, LifecycleManager};

use crate::exit_error::ExitError;

type SystemManager = LifecycleManager<SystemRunner, SystemClock, TerminalNotifier>;

pub(crate) fn load_config(project_dir: &Path) -> Result<ComposeConfig> {
    ComposeConfig::load(project_dir).map_err(|error| failure(error.into()))
}

pub(crate) fn manager(project_dir: &Path) -> Result<SystemManager> {
    let config = load_config(project_dir)?;
    Ok(LifecycleManager::new(config, SystemRunner::new(), SystemClock, TerminalNotifier::new()))
}

/// Convert an engine failure into a process exit that preserves the
/// child's exit code where one exists.
pub(crate) fn failure(error: EngineError) -> anyhow::Error {
    ExitError::new(error.exit_code(), format!("error: {error}")).into()
}
