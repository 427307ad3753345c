// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dh-engine: Decision logic for the dockhand CLI — build-avoidance
//! fingerprinting and the container readiness state machine.

pub mod dispatch;
pub mod error;
pub mod gate;
pub mod hasher;
pub mod lifecycle;
pub mod poller;
pub mod probe;
pub mod store;

pub use dispatch::CommandDispatcher;
pub use error::EngineError;
pub use gate::{BuildDecision, BuildGate};
pub use hasher::ContentFingerprinter;
pub use lifecycle::{LifecycleManager, StartMode, StartOutcome, HEALTH_POLL_INTERVAL};
pub use poller::{PollOutcome, ReadinessPoller};
pub use probe::StatusProbe;
pub use store::FingerprintStore;
