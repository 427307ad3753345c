// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line shapes for `docker compose` and `docker build`.
//!
//! All external invocations the engine produces are assembled here, so
//! the decision logic and the tests share one source of truth for the
//! exact argument order.

use crate::subprocess::CommandLine;
use dh_core::{ComposeConfig, ComposeTarget, ImageBuildConfig};

/// `docker compose <file args> …` prefix shared by every subcommand.
fn base(config: &ComposeConfig) -> CommandLine {
    CommandLine::new("docker").arg("compose").args(config.file_args())
}

/// `docker compose <files> build`
pub fn build(config: &ComposeConfig) -> CommandLine {
    base(config).arg("build")
}

/// `docker compose <files> up [-d] [service]`
pub fn up(config: &ComposeConfig, target: &ComposeTarget, detached: bool) -> CommandLine {
    let mut cmd = base(config).arg("up");
    if detached {
        cmd = cmd.arg("-d");
    }
    if let Some(service) = target.name() {
        cmd = cmd.arg(service);
    }
    cmd
}

/// `docker compose <files> exec <options> <service> <command…>`
pub fn exec(
    config: &ComposeConfig,
    service: &str,
    options: &[String],
    command: &[String],
) -> CommandLine {
    base(config).arg("exec").args(options.iter().cloned()).arg(service).args(command.iter().cloned())
}

/// `docker compose <files> run <options> <service> <command…>`
pub fn run(
    config: &ComposeConfig,
    service: &str,
    options: &[String],
    command: &[String],
) -> CommandLine {
    base(config).arg("run").args(options.iter().cloned()).arg(service).args(command.iter().cloned())
}

/// `docker compose <files> logs -f [service]`
pub fn logs(config: &ComposeConfig, target: &ComposeTarget) -> CommandLine {
    let mut cmd = base(config).arg("logs").arg("-f");
    if let Some(service) = target.name() {
        cmd = cmd.arg(service);
    }
    cmd
}

/// `docker compose <files> ps --format json`
pub fn ps_json(config: &ComposeConfig) -> CommandLine {
    base(config).arg("ps").arg("--format").arg("json")
}

/// `docker build --build-arg=K=V… --tag=T <path>` for the optional base image.
pub fn docker_build(image: &ImageBuildConfig) -> CommandLine {
    let mut cmd = CommandLine::new("docker").arg("build");
    for (key, value) in &image.build_args {
        cmd = cmd.arg(format!("--build-arg={}={}", key, value));
    }
    cmd.arg(format!("--tag={}", image.tag)).arg(image.path.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
