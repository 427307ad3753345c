// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A clock that provides the current time and cooperative sleeping.
///
/// All waiting in dockhand is a bounded poll loop; routing the sleep
/// through the clock lets tests drive those loops without real delays.
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Fake clock for testing with controllable time.
///
/// `sleep` advances the clock instead of blocking, and every sleep is
/// recorded so tests can assert how a poll loop waited.
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<Instant>>,
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
            slept: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Advance the clock by the given duration without recording a sleep
    pub fn advance(&self, duration: Duration) {
        *self.current.lock() += duration;
    }

    /// All sleeps performed through this clock, in order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.slept.lock().clone()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.current.lock()
    }

    fn sleep(&self, duration: Duration) {
        self.slept.lock().push(duration);
        *self.current.lock() += duration;
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
