// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logs command handler

use anyhow::Result;
use std::path::Path;

use dh_adapters::compose;
use dh_adapters::subprocess::ProcessRunner;
use dh_adapters::SystemRunner;
use dh_core::ComposeTarget;

/// Hand the terminal to `docker compose logs -f`. No follow-up logic
/// runs afterwards, so the process image is replaced outright.
pub fn handle(project_dir: &Path, service: Option<String>) -> Result<()> {
    let config = super::load_config(project_dir)?;
    let target = ComposeTarget::from(service);
    let command = compose::logs(&config, &target);
    match SystemRunner::new().exec_replace(&command, &config.root) {
        Ok(never) => match never {},
        Err(error) => Err(super::failure(error.into())),
    }
}
