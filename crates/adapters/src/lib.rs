// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dh-adapters: External collaborators for the dockhand engine —
//! subprocess execution, compose command shapes, and user notifications.

pub mod compose;
pub mod notify;
pub mod subprocess;

pub use notify::{Notifier, TerminalNotifier};
pub use subprocess::{
    CommandLine, ProcessRunner, RunOptions, RunOutput, SubprocessError, SystemRunner,
};

#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifier;
#[cfg(any(test, feature = "test-support"))]
pub use subprocess::FakeRunner;
