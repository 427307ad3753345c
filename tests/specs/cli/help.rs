// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn help_lists_every_subcommand() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("up")
        .stdout_has("build")
        .stdout_has("run")
        .stdout_has("wait")
        .stdout_has("status")
        .stdout_has("logs");
}

#[test]
fn run_help_shows_usage() {
    cli().args(&["run", "--help"]).passes().stdout_has("Usage:");
}

#[test]
fn wait_help_documents_the_timeout() {
    cli().args(&["wait", "--help"]).passes().stdout_has("--timeout");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn run_without_a_command_is_a_usage_error() {
    cli().args(&["run", "web"]).fails_with(2).stderr_has("Usage:");
}
