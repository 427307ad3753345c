// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress notes for the human operator.
//!
//! Purely observational: nothing in the control flow depends on whether
//! a note was delivered.

/// Sink for human-readable progress messages.
pub trait Notifier: Clone + Send + Sync {
    fn note(&self, message: &str);
}

/// Prints notes to stderr, leaving stdout to the wrapped commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn note(&self, message: &str) {
        tracing::info!(%message, "note");
        eprintln!("{}", message);
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::Notifier;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Fake notifier recording every note for assertions.
    #[derive(Clone, Default)]
    pub struct FakeNotifier {
        notes: Arc<Mutex<Vec<String>>>,
    }

    impl FakeNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn notes(&self) -> Vec<String> {
            self.notes.lock().clone()
        }
    }

    impl Notifier for FakeNotifier {
        fn note(&self, message: &str) {
            self.notes.lock().push(message.to_string());
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifier;

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
