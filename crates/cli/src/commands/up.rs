// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Up command handler

use anyhow::Result;
use std::path::Path;

use dh_core::ComposeTarget;
use dh_engine::StartMode;

/// Build if needed, then start containers. The foreground path replaces
/// this process with `docker compose up`, so it only returns on error.
pub fn handle(project_dir: &Path, service: Option<String>, detach: bool) -> Result<()> {
    let manager = super::manager(project_dir)?;
    let target = ComposeTarget::from(service);
    let mode = if detach { StartMode::Detached } else { StartMode::Attach };
    manager.start(&target, mode).map_err(super::failure)?;
    if detach {
        match target {
            ComposeTarget::All => println!("Containers started"),
            ComposeTarget::Service(ref name) => println!("Started {}", name),
        }
    }
    Ok(())
}
