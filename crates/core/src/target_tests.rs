// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn service_target_carries_its_name() {
    let target = ComposeTarget::service("web");
    assert_eq!(target.name(), Some("web"));
    assert!(!target.is_all());
}

#[test]
fn all_target_has_no_name() {
    assert_eq!(ComposeTarget::All.name(), None);
    assert!(ComposeTarget::All.is_all());
}

#[test]
fn from_option() {
    assert_eq!(ComposeTarget::from(Some("db".to_string())), ComposeTarget::service("db"));
    assert_eq!(ComposeTarget::from(None), ComposeTarget::All);
}

#[yare::parameterized(
    all     = { ComposeTarget::All, "all" },
    service = { ComposeTarget::service("web"), "web" },
)]
fn display(target: ComposeTarget, expected: &str) {
    assert_eq!(target.to_string(), expected);
}
