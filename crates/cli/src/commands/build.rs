// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build command handler

use anyhow::Result;
use std::path::Path;

use dh_engine::BuildDecision;

pub fn handle(project_dir: &Path, force: bool) -> Result<()> {
    let manager = super::manager(project_dir)?;
    if force {
        manager.force_build().map_err(super::failure)?;
        println!("Build complete");
        return Ok(());
    }
    match manager.ensure_built().map_err(super::failure)? {
        BuildDecision::Built => println!("Build complete"),
        BuildDecision::Cached => println!("Already built (inputs unchanged)"),
    }
    Ok(())
}
