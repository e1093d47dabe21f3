//! Integration tests for configuration resolution
//!
//! Tests cover:
//! - Explicit config file loading
//! - Missing or unparsable explicit config files are startup errors
//! - Command-line/environment overrides beat file values

use album_common::config::{ConfigOverrides, ServiceConfig};
use album_common::Error;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write config");
    file
}

#[test]
fn test_explicit_config_file_values_used() {
    let file = write_config(
        r#"
host = "0.0.0.0"
port = 9191
seed = false
log_level = "debug"
"#,
    );

    let config = ServiceConfig::resolve(&ConfigOverrides::default(), Some(file.path())).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 9191);
    assert!(!config.seed);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.bind_addr(), "0.0.0.0:9191");
}

#[test]
fn test_empty_config_file_falls_back_to_defaults() {
    let file = write_config("");

    let config = ServiceConfig::resolve(&ConfigOverrides::default(), Some(file.path())).unwrap();

    assert_eq!(config, ServiceConfig::default());
}

#[test]
fn test_overrides_beat_config_file() {
    let file = write_config("host = \"0.0.0.0\"\nport = 9191\n");
    let overrides = ConfigOverrides {
        host: Some("localhost".to_string()),
        seed: Some(false),
        ..Default::default()
    };

    let config = ServiceConfig::resolve(&overrides, Some(file.path())).unwrap();

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 9191);
    assert!(!config.seed);
}

#[test]
fn test_missing_explicit_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = ServiceConfig::resolve(&ConfigOverrides::default(), Some(&missing));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_config_file_is_error() {
    let file = write_config("port = [1, 2");

    let result = ServiceConfig::resolve(&ConfigOverrides::default(), Some(file.path()));

    assert!(matches!(result, Err(Error::Toml(_))));
}
