// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded cooperative polling of an external predicate.
//!
//! Container health is only observable by re-running a status command;
//! there is no push notification to wait on. So waiting is a sleep loop
//! with a wall-clock budget, and running out of budget is a normal
//! outcome returned as data — never an error.

use dh_core::Clock;
use std::time::Duration;

/// Terminal result of one polling run. Never partially satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Satisfied,
    TimedOut,
}

pub struct ReadinessPoller<C: Clock> {
    clock: C,
    interval: Duration,
}

impl<C: Clock> ReadinessPoller<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self { clock, interval }
    }

    /// Evaluate `predicate` until it passes or `timeout` elapses.
    ///
    /// The predicate is evaluated before any sleep, so an
    /// immediately-true predicate returns `Satisfied` without waiting
    /// and `timeout = 0` still reports the true initial state. Each
    /// evaluation is a fresh query; nothing is cached between rounds.
    pub fn wait_for<F>(&self, mut predicate: F, timeout: Duration) -> PollOutcome
    where
        F: FnMut() -> bool,
    {
        let start = self.clock.now();
        loop {
            if predicate() {
                return PollOutcome::Satisfied;
            }
            let elapsed = self.clock.now().duration_since(start);
            if elapsed >= timeout {
                tracing::debug!(?timeout, "readiness poll timed out");
                return PollOutcome::TimedOut;
            }
            self.clock.sleep(self.interval);
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
