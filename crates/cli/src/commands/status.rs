// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status command handler

use anyhow::Result;
use std::path::Path;

use dh_adapters::SystemRunner;
use dh_engine::StatusProbe;

use crate::output::{render_status, OutputFormat};

pub fn handle(project_dir: &Path, service: Option<String>, format: OutputFormat) -> Result<()> {
    let config = super::load_config(project_dir)?;
    let probe = StatusProbe::new(config, SystemRunner::new());
    let mut entries = probe.entries().map_err(super::failure)?;
    if let Some(service) = &service {
        entries.retain(|entry| &entry.service == service || &entry.name == service);
    }
    println!("{}", render_status(&entries, format)?);
    Ok(())
}
