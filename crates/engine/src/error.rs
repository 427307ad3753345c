// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error taxonomy.
//!
//! Poll timeouts are deliberately absent: a readiness wait that runs out
//! of budget is a normal outcome (`PollOutcome::TimedOut`), not an error.

use dh_adapters::subprocess::{CommandLine, RunOutput, SubprocessError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A declared fingerprint input does not exist. Distinct from an
    /// empty file: the fingerprint is never computed over missing paths.
    #[error("fingerprint input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error(transparent)]
    Config(#[from] dh_core::ConfigError),

    /// The build subprocess exited nonzero. The fingerprint is not
    /// recorded, so the next gate check retries the build.
    #[error("build failed (exit {code})")]
    BuildFailed { code: i32 },

    /// A non-build subprocess exited nonzero. Captured output included
    /// for diagnosis; never retried automatically.
    #[error("`{command}` failed (exit {code}){}", fmt_stderr(stderr))]
    CommandFailed { command: String, code: i32, stderr: String },

    #[error(transparent)]
    Subprocess(#[from] SubprocessError),

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn fmt_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl EngineError {
    pub(crate) fn command_failed(command: &CommandLine, output: &RunOutput) -> Self {
        EngineError::CommandFailed {
            command: command.to_string(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::Io { path: path.into(), source }
    }

    /// Exit code to surface when this error terminates the process.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::BuildFailed { code } | EngineError::CommandFailed { code, .. }
                if *code > 0 =>
            {
                *code
            }
            _ => 1,
        }
    }
}
