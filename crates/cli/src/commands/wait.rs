// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wait command handler

use anyhow::Result;
use std::path::Path;
use std::time::Duration;

use crate::exit_error::ExitError;

pub fn handle(project_dir: &Path, service: &str, timeout_secs: u64) -> Result<()> {
    let manager = super::manager(project_dir)?;
    let timeout = Duration::from_secs(timeout_secs);
    if manager.wait_for_healthy(service, timeout).map_err(super::failure)? {
        println!("{} is healthy", service);
        Ok(())
    } else {
        Err(ExitError::new(
            1,
            format!("{} did not become healthy within {}s", service, timeout_secs),
        )
        .into())
    }
}
