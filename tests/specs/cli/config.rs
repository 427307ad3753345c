// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading specs

use crate::prelude::*;

#[test]
fn malformed_config_is_a_parse_error() {
    let project = Project::empty();
    project.file("dockhand.toml", "compose-files = [\n");

    project
        .dockhand()
        .args(&["build"])
        .fails_with(1)
        .stderr_has("could not parse")
        .stderr_has("dockhand.toml");
}

#[test]
fn unknown_keys_are_rejected() {
    let project = Project::empty();
    project.file("dockhand.toml", "copmose-files = [\"docker-compose.yml\"]\n");

    project.dockhand().args(&["build"]).fails_with(1).stderr_has("could not parse");
}

#[test]
fn missing_config_falls_back_to_defaults() {
    // defaults point the fingerprint at docker-compose.yml; providing
    // nothing else, the failure is about that file rather than the config
    Project::empty()
        .dockhand()
        .args(&["build"])
        .fails_with(1)
        .stderr_has("docker-compose.yml");
}
