// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn write_config(dir: &Path, contents: &str) {
    std::fs::write(dir.join(CONFIG_FILE), contents).unwrap();
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ComposeConfig::load(dir.path()).unwrap();
    assert_eq!(config.compose_files, vec![PathBuf::from("docker-compose.yml")]);
    assert!(config.fingerprint.is_empty());
    assert!(config.image.is_none());
    assert_eq!(config.root, dir.path());
}

#[test]
fn default_fingerprint_inputs_are_the_compose_files() {
    let config = ComposeConfig::defaults("/proj");
    let inputs = config.fingerprint_inputs();
    assert_eq!(inputs.files, vec![PathBuf::from("docker-compose.yml")]);
    assert!(inputs.directories.is_empty());
}

#[test]
fn full_config_parses() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
compose-files = ["docker-compose.yml", "docker-compose.dev.yml"]

[fingerprint]
files = ["Dockerfile", ".env"]
directories = ["docker"]

[image]
tag = "app-base"
path = "docker/base"

[image.build-args]
RUBY_VERSION = "3.3"
NODE_VERSION = "22"
"#,
    );
    let config = ComposeConfig::load(dir.path()).unwrap();
    assert_eq!(config.compose_files.len(), 2);
    assert_eq!(config.fingerprint.files, vec![PathBuf::from("Dockerfile"), PathBuf::from(".env")]);
    assert_eq!(config.fingerprint.directories, vec![PathBuf::from("docker")]);
    let image = config.image.unwrap();
    assert_eq!(image.tag, "app-base");
    assert_eq!(image.build_args.len(), 2);
}

#[test]
fn declared_fingerprint_inputs_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "[fingerprint]\nfiles = [\"Dockerfile\"]\n");
    let config = ComposeConfig::load(dir.path()).unwrap();
    assert_eq!(config.fingerprint_inputs().files, vec![PathBuf::from("Dockerfile")]);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "compose-files = not-a-list\n");
    let err = ComposeConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "compose-fils = [\"docker-compose.yml\"]\n");
    assert!(ComposeConfig::load(dir.path()).is_err());
}

#[test]
fn file_args_interleave_f_flags() {
    let mut config = ComposeConfig::defaults("/proj");
    config.compose_files =
        vec![PathBuf::from("docker-compose.yml"), PathBuf::from("docker-compose.ci.yml")];
    assert_eq!(
        config.file_args(),
        vec!["-f", "docker-compose.yml", "-f", "docker-compose.ci.yml"]
    );
}

#[test]
fn state_dir_is_under_root() {
    let config = ComposeConfig::defaults("/proj");
    assert_eq!(config.state_dir(), PathBuf::from("/proj/.dockhand"));
}
