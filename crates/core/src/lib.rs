// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dh-core: Domain types for the dockhand CLI tool

pub mod clock;
pub mod config;
pub mod fingerprint;
pub mod status;
pub mod target;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ComposeConfig, ConfigError, FingerprintInputs, ImageBuildConfig, CONFIG_FILE};
pub use fingerprint::Fingerprint;
pub use status::{parse_ps, status_for, ContainerStatus, PsEntry};
pub use target::ComposeTarget;
