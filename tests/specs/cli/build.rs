// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build gate specs that run without a container engine

use crate::prelude::*;

#[test]
fn build_in_an_empty_project_reports_the_missing_input() {
    // no dockhand.toml: the default fingerprint input is the default
    // compose file, which does not exist either
    Project::empty()
        .dockhand()
        .args(&["build"])
        .fails_with(1)
        .stderr_has("fingerprint input not found")
        .stderr_has("docker-compose.yml");
}

#[test]
fn build_reports_declared_inputs_that_do_not_exist() {
    let project = Project::empty();
    project.file("docker-compose.yml", "services: {}\n");
    project.file(
        "dockhand.toml",
        "[fingerprint]\nfiles = [\"Dockerfile\"]\n",
    );

    project
        .dockhand()
        .args(&["build"])
        .fails_with(1)
        .stderr_has("fingerprint input not found")
        .stderr_has("Dockerfile");
}
