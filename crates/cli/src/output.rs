// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering for status listings.

use clap::ValueEnum;
use dh_core::PsEntry;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a `ps` listing in the requested format.
///
/// JSON carries the derived status alongside the raw engine fields so
/// scripts do not have to re-implement the health mapping.
pub fn render_status(entries: &[PsEntry], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entries)),
        OutputFormat::Json => {
            let rows: Vec<_> = entries
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "service": entry.service,
                        "name": entry.name,
                        "state": entry.state,
                        "health": entry.health,
                        "status": entry.status(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
    }
}

fn render_text(entries: &[PsEntry]) -> String {
    if entries.is_empty() {
        return "No containers".to_string();
    }
    let mut out = format!("{:<20} {:<12} {:<12} STATUS", "SERVICE", "STATE", "HEALTH");
    for entry in entries {
        let health = if entry.health.is_empty() { "-" } else { entry.health.as_str() };
        out.push_str(&format!(
            "\n{:<20} {:<12} {:<12} {}",
            entry.service,
            entry.state,
            health,
            entry.status()
        ));
    }
    out
}
