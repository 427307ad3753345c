// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dockhand: content-aware orchestration over `docker compose`.
//!
//! Every subcommand resolves `dockhand.toml` in the project directory,
//! then delegates to the engine. Process termination is centralised in
//! `main()` via [`ExitError`] so commands never call `exit()` themselves.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "dockhand", version, about = "Build-aware docker compose orchestration")]
struct Cli {
    /// Project directory holding dockhand.toml and the compose files
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build images if needed, then start containers
    Up {
        /// Single service to start (default: the whole project)
        service: Option<String>,
        /// Start in the background instead of attaching
        #[arg(short, long)]
        detach: bool,
    },
    /// Build images unless the declared inputs are unchanged
    Build {
        /// Rebuild even when the recorded fingerprint matches
        #[arg(long)]
        force: bool,
    },
    /// Run a command in a service container
    Run {
        /// Service to run the command in
        service: String,
        /// Option placed before the service name, e.g. --opt=-T (can repeat)
        #[arg(long = "opt")]
        options: Vec<String>,
        /// Upper bound on the command's runtime, in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Command and arguments to execute
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Wait until a service reports healthy, starting it when stopped
    Wait {
        /// Service to wait on
        service: String,
        /// Seconds to wait before giving up
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },
    /// Show container status
    Status {
        /// Limit the listing to one service
        service: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Follow container logs
    Logs {
        /// Single service to follow (default: the whole project)
        service: Option<String>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(error) = dispatch(cli) {
        match error.downcast::<ExitError>() {
            Ok(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                process::exit(exit.code);
            }
            Err(other) => {
                eprintln!("error: {other:#}");
                process::exit(1);
            }
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let dir = cli.project_dir;
    tracing::debug!(project_dir = %dir.display(), "dispatching");
    match cli.command {
        Command::Up { service, detach } => commands::up::handle(&dir, service, detach),
        Command::Build { force } => commands::build::handle(&dir, force),
        Command::Run { service, options, timeout, command } => {
            commands::run::handle(&dir, &service, &command, &options, timeout)
        }
        Command::Wait { service, timeout } => commands::wait::handle(&dir, &service, timeout),
        Command::Status { service, output } => commands::status::handle(&dir, service, output),
        Command::Logs { service } => commands::logs::handle(&dir, service),
    }
}

/// Filter comes from `DOCKHAND_LOG`; the default keeps the terminal
/// quiet so streamed compose output stays readable.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("DOCKHAND_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
