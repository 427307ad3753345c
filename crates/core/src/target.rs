// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

/// What a compose operation applies to: the whole project or one service.
///
/// Carried by name only; nothing owns a container beyond the engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComposeTarget {
    All,
    Service(String),
}

impl ComposeTarget {
    pub fn service(name: impl Into<String>) -> Self {
        ComposeTarget::Service(name.into())
    }

    /// The service name, or `None` for the whole project.
    pub fn name(&self) -> Option<&str> {
        match self {
            ComposeTarget::All => None,
            ComposeTarget::Service(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ComposeTarget::All)
    }
}

impl From<Option<String>> for ComposeTarget {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => ComposeTarget::Service(name),
            None => ComposeTarget::All,
        }
    }
}

impl fmt::Display for ComposeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeTarget::All => write!(f, "all"),
            ComposeTarget::Service(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
