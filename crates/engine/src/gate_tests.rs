// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::cell::Cell;
use std::path::Path;

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Dockerfile"), "FROM debian\n").unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn gate(&self) -> BuildGate {
        let hasher = ContentFingerprinter::new(self.root(), vec!["Dockerfile".into()], vec![]);
        let store = FingerprintStore::new(self.root().join(".dockhand/builds"));
        BuildGate::new(hasher, store)
    }

    fn touch_dockerfile(&self, contents: &str) {
        std::fs::write(self.root().join("Dockerfile"), contents).unwrap();
    }
}

#[test]
fn unchanged_inputs_build_exactly_once() {
    let fixture = Fixture::new();
    let gate = fixture.gate();
    let builds = Cell::new(0);

    let first = gate
        .ensure_built(|| {
            builds.set(builds.get() + 1);
            Ok(())
        })
        .unwrap();
    let second = gate
        .ensure_built(|| {
            builds.set(builds.get() + 1);
            Ok(())
        })
        .unwrap();

    assert_eq!(first, BuildDecision::Built);
    assert_eq!(second, BuildDecision::Cached);
    assert_eq!(builds.get(), 1);
}

#[test]
fn changed_inputs_build_again() {
    let fixture = Fixture::new();
    let gate = fixture.gate();
    let builds = Cell::new(0);
    let build = || {
        gate.ensure_built(|| {
            builds.set(builds.get() + 1);
            Ok(())
        })
        .unwrap()
    };

    build();
    fixture.touch_dockerfile("FROM alpine\n");
    assert_eq!(build(), BuildDecision::Built);
    assert_eq!(builds.get(), 2);
}

#[test]
fn failed_build_is_not_recorded() {
    let fixture = Fixture::new();
    let gate = fixture.gate();

    let err = gate.ensure_built(|| Err(EngineError::BuildFailed { code: 1 })).unwrap_err();
    assert!(matches!(err, EngineError::BuildFailed { .. }));

    // the fingerprint was never saved, so the build is attempted again
    let retried = Cell::new(false);
    let decision = gate
        .ensure_built(|| {
            retried.set(true);
            Ok(())
        })
        .unwrap();
    assert_eq!(decision, BuildDecision::Built);
    assert!(retried.get());
}

#[test]
fn missing_input_aborts_before_the_build_runs() {
    let fixture = Fixture::new();
    std::fs::remove_file(fixture.root().join("Dockerfile")).unwrap();
    let gate = fixture.gate();
    let ran = Cell::new(false);
    let err = gate
        .ensure_built(|| {
            ran.set(true);
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, EngineError::MissingInput { .. }));
    assert!(!ran.get());
}

#[test]
fn rebuild_ignores_the_cache_but_records_success() {
    let fixture = Fixture::new();
    let gate = fixture.gate();
    let builds = Cell::new(0);

    gate.ensure_built(|| {
        builds.set(builds.get() + 1);
        Ok(())
    })
    .unwrap();
    gate.rebuild(|| {
        builds.set(builds.get() + 1);
        Ok(())
    })
    .unwrap();
    let decision = gate
        .ensure_built(|| {
            builds.set(builds.get() + 1);
            Ok(())
        })
        .unwrap();

    assert_eq!(builds.get(), 2);
    assert_eq!(decision, BuildDecision::Cached);
}

#[test]
fn failed_rebuild_is_not_recorded() {
    let fixture = Fixture::new();
    let gate = fixture.gate();
    let err = gate.rebuild(|| Err(EngineError::BuildFailed { code: 2 })).unwrap_err();
    assert!(matches!(err, EngineError::BuildFailed { code: 2 }));
    let decision = gate.ensure_built(|| Ok(())).unwrap();
    assert_eq!(decision, BuildDecision::Built);
}
