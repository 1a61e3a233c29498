//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{GrowstreetConfig, LogLevel};
use growstreet_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_growstreet_style.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.breakpoints.widths, vec![480, 768, 992, 1280, 1536]);
}

#[test]
fn load_empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(load_from_path(&path).unwrap(), GrowstreetConfig::default());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_keeps_values_that_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    std::fs::write(&path, "[breakpoints]\nwidths = []\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.breakpoints.widths.is_empty());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("growstreet").join("style.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, GrowstreetConfig::default());
}

#[test]
fn default_template_parses_to_defaults() {
    let config: GrowstreetConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config, GrowstreetConfig::default());
}

#[test]
fn default_config_path_ends_with_style_toml() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("growstreet/style.toml"));
    }
}
