// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for the CLI specs: a fluent wrapper over `assert_cmd`
//! and a temp-directory project fixture.

pub struct Cli {
    cmd: assert_cmd::Command,
}

/// A `dockhand` invocation with no project context.
pub fn cli() -> Cli {
    Cli { cmd: assert_cmd::Command::cargo_bin("dockhand").unwrap() }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Verdict {
        Verdict { assert: self.cmd.assert().success() }
    }

    pub fn fails(mut self) -> Verdict {
        Verdict { assert: self.cmd.assert().failure() }
    }

    pub fn fails_with(mut self, code: i32) -> Verdict {
        Verdict { assert: self.cmd.assert().code(code) }
    }
}

pub struct Verdict {
    assert: assert_cmd::assert::Assert,
}

impl Verdict {
    pub fn stdout_has(self, needle: &str) -> Self {
        let output = self.assert.get_output();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let output = self.assert.get_output();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }
}

/// A project directory the binary is pointed at via `--project-dir`.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn file(&self, path: &str, contents: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, contents).unwrap();
    }

    pub fn dockhand(&self) -> Cli {
        let mut invocation = cli();
        invocation.cmd.arg("--project-dir").arg(self.dir.path());
        invocation
    }
}
