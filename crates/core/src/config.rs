// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration loaded from `dockhand.toml`.
//!
//! Configuration is an explicit struct passed into each component
//! constructor; there is no ambient process-wide lookup. A missing
//! config file yields the defaults, a malformed one is an error.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name, resolved against the project root.
pub const CONFIG_FILE: &str = "dockhand.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Files and directories whose content gates image rebuilds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FingerprintInputs {
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub directories: Vec<PathBuf>,
}

impl FingerprintInputs {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Optional base image built with plain `docker build` before
/// `docker compose build` runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ImageBuildConfig {
    pub tag: String,
    pub path: PathBuf,
    /// Passed as `--build-arg=KEY=VALUE`, in key order.
    #[serde(default)]
    pub build_args: BTreeMap<String, String>,
}

/// Per-project configuration for compose invocations and the build gate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ComposeConfig {
    /// Base path every relative path below resolves against.
    #[serde(skip)]
    pub root: PathBuf,
    /// Compose file arguments, in order.
    #[serde(default = "default_compose_files")]
    pub compose_files: Vec<PathBuf>,
    #[serde(default)]
    pub fingerprint: FingerprintInputs,
    #[serde(default)]
    pub image: Option<ImageBuildConfig>,
}

fn default_compose_files() -> Vec<PathBuf> {
    vec![PathBuf::from("docker-compose.yml")]
}

impl ComposeConfig {
    /// Defaults for a project with no `dockhand.toml`.
    pub fn defaults(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            compose_files: default_compose_files(),
            fingerprint: FingerprintInputs::default(),
            image: None,
        }
    }

    /// Load `dockhand.toml` from `root`, falling back to defaults when
    /// the file does not exist.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let path = root.join(CONFIG_FILE);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::defaults(root));
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        let mut config: ComposeConfig =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        config.root = root;
        Ok(config)
    }

    /// `-f <file>` argument pairs for every compose invocation, in order.
    pub fn file_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.compose_files.len() * 2);
        for file in &self.compose_files {
            args.push("-f".to_string());
            args.push(file.to_string_lossy().into_owned());
        }
        args
    }

    /// Effective fingerprint inputs: the declared set, or the compose
    /// files themselves when nothing is declared.
    pub fn fingerprint_inputs(&self) -> FingerprintInputs {
        if self.fingerprint.is_empty() {
            FingerprintInputs { files: self.compose_files.clone(), directories: Vec::new() }
        } else {
            self.fingerprint.clone()
        }
    }

    /// Directory holding dockhand state for this project.
    pub fn state_dir(&self) -> PathBuf {
        self.root.join(".dockhand")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
