// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous subprocess execution.
//!
//! The engine is single-threaded and blocking by design; timeouts are
//! enforced by polling `try_wait` while reader threads drain the pipes,
//! and the interactive-attach path replaces the process image outright.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Child, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default bound for capture-style invocations (status queries and the
/// like); long-running operations pass their own timeout or none.
pub const CAPTURE_TIMEOUT: Duration = Duration::from_secs(30);

/// Interval between `try_wait` checks while a child runs.
const WAIT_POLL: Duration = Duration::from_millis(50);

/// An ordered argument list for one external command.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How to run a command: where, for how long, and whether to capture.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub cwd: PathBuf,
    /// `None` means run to completion.
    pub timeout: Option<Duration>,
    /// Capture output instead of streaming to the user's terminal.
    pub quiet: bool,
}

impl RunOptions {
    /// Stream output to the terminal, no timeout.
    pub fn streamed(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into(), timeout: None, quiet: false }
    }

    /// Capture output, no timeout.
    pub fn quiet(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into(), timeout: None, quiet: true }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Exit status and captured output of one completed command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Errors from the runner itself. A command that runs and exits nonzero
/// is not an error at this level — callers read `RunOutput::code`.
#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },
    #[error("waiting on `{command}` failed: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not replace process with `{command}`: {source}")]
    Exec {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Process-execution facility the engine calls into.
///
/// `run` executes to completion (or timeout), `capture` is the
/// short-timeout quiet convenience, and `exec_replace` replaces the
/// current process image — its success path never returns, which the
/// `Infallible` payload encodes at the type level.
pub trait ProcessRunner: Clone + Send + Sync {
    fn run(&self, command: &CommandLine, options: &RunOptions) -> Result<RunOutput, SubprocessError>;

    fn capture(&self, command: &CommandLine, cwd: &Path) -> Result<RunOutput, SubprocessError> {
        self.run(command, &RunOptions::quiet(cwd).with_timeout(CAPTURE_TIMEOUT))
    }

    fn exec_replace(
        &self,
        command: &CommandLine,
        cwd: &Path,
    ) -> Result<Infallible, SubprocessError>;
}

/// Runs commands via `std::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine, options: &RunOptions) -> Result<RunOutput, SubprocessError> {
        let mut cmd = std::process::Command::new(&command.program);
        cmd.args(&command.args).current_dir(&options.cwd);
        if options.quiet {
            cmd.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        } else {
            cmd.stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        tracing::debug!(command = %command, quiet = options.quiet, "running subprocess");
        let mut child = cmd
            .spawn()
            .map_err(|source| SubprocessError::Spawn { command: command.to_string(), source })?;

        // Drain pipes on separate threads so a chatty child cannot
        // deadlock against a full pipe buffer while we poll for exit.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = wait_with_timeout(&mut child, options.timeout, command)?;

        let stdout = stdout.map(join_drained).unwrap_or_default();
        let stderr = stderr.map(join_drained).unwrap_or_default();
        let code = status.code().unwrap_or(-1);
        tracing::debug!(command = %command, code, "subprocess finished");
        Ok(RunOutput { code, stdout, stderr })
    }

    #[cfg(unix)]
    fn exec_replace(
        &self,
        command: &CommandLine,
        cwd: &Path,
    ) -> Result<Infallible, SubprocessError> {
        use std::os::unix::process::CommandExt;

        tracing::debug!(command = %command, "replacing process image");
        let source = std::process::Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .exec();
        // exec only returns on failure
        Err(SubprocessError::Exec { command: command.to_string(), source })
    }

    #[cfg(not(unix))]
    fn exec_replace(
        &self,
        command: &CommandLine,
        _cwd: &Path,
    ) -> Result<Infallible, SubprocessError> {
        Err(SubprocessError::Exec {
            command: command.to_string(),
            source: std::io::Error::other("process replacement is unavailable on this platform"),
        })
    }
}

fn drain<R: std::io::Read + Send + 'static>(mut source: R) -> std::thread::JoinHandle<String> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = source.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_drained(handle: std::thread::JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
    command: &CommandLine,
) -> Result<ExitStatus, SubprocessError> {
    let deadline = timeout.map(|t| Instant::now() + t);
    loop {
        let polled = child
            .try_wait()
            .map_err(|source| SubprocessError::Wait { command: command.to_string(), source })?;
        if let Some(status) = polled {
            return Ok(status);
        }
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                // timeout is always Some when deadline is
                let timeout = timeout.unwrap_or_default();
                return Err(SubprocessError::Timeout { command: command.to_string(), timeout });
            }
        }
        std::thread::sleep(WAIT_POLL);
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{CommandLine, ProcessRunner, RunOptions, RunOutput, SubprocessError};
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::convert::Infallible;
    use std::path::Path;
    use std::sync::Arc;

    /// One recorded `run` invocation.
    #[derive(Debug, Clone)]
    pub struct RecordedRun {
        pub command: CommandLine,
        pub options: RunOptions,
    }

    struct FakeState {
        runs: Vec<RecordedRun>,
        exec_calls: Vec<CommandLine>,
        outputs: VecDeque<RunOutput>,
    }

    /// Scripted runner for testing.
    ///
    /// `run` pops the next queued output (empty success when the queue
    /// runs dry) and records the invocation; `exec_replace` records the
    /// command and fails, since a fake cannot replace the process image.
    #[derive(Clone)]
    pub struct FakeRunner {
        inner: Arc<Mutex<FakeState>>,
    }

    impl Default for FakeRunner {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeState {
                    runs: Vec::new(),
                    exec_calls: Vec::new(),
                    outputs: VecDeque::new(),
                })),
            }
        }
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a full output for the next `run` call.
        pub fn push_output(&self, output: RunOutput) {
            self.inner.lock().outputs.push_back(output);
        }

        /// Queue a zero-exit output with the given stdout.
        pub fn push_success(&self, stdout: &str) {
            self.push_output(RunOutput { code: 0, stdout: stdout.to_string(), stderr: String::new() });
        }

        /// Queue a nonzero-exit output with the given stderr.
        pub fn push_failure(&self, code: i32, stderr: &str) {
            self.push_output(RunOutput { code, stdout: String::new(), stderr: stderr.to_string() });
        }

        /// Commands passed to `run`, in call order.
        pub fn calls(&self) -> Vec<CommandLine> {
            self.inner.lock().runs.iter().map(|r| r.command.clone()).collect()
        }

        /// Full recorded `run` invocations.
        pub fn runs(&self) -> Vec<RecordedRun> {
            self.inner.lock().runs.clone()
        }

        /// Commands passed to `exec_replace`.
        pub fn exec_calls(&self) -> Vec<CommandLine> {
            self.inner.lock().exec_calls.clone()
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(
            &self,
            command: &CommandLine,
            options: &RunOptions,
        ) -> Result<RunOutput, SubprocessError> {
            let mut state = self.inner.lock();
            state.runs.push(RecordedRun { command: command.clone(), options: options.clone() });
            Ok(state.outputs.pop_front().unwrap_or_default())
        }

        fn exec_replace(
            &self,
            command: &CommandLine,
            _cwd: &Path,
        ) -> Result<Infallible, SubprocessError> {
            self.inner.lock().exec_calls.push(command.clone());
            Err(SubprocessError::Exec {
                command: command.to_string(),
                source: std::io::Error::other("fake runner does not replace the process image"),
            })
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRunner, RecordedRun};

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
