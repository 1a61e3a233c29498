//! Grow Street style compiler configuration.
//!
//! TOML-based configuration for the breakpoint table and logging. Every
//! section has defaults, so a partial file (or no file at all) works.
//!
//! ```rust,no_run
//! use growstreet_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BreakpointsConfig, GrowstreetConfig, LogLevel, LoggingConfig, CONFIG_SCHEMA_VERSION};

use growstreet_common::ConfigError;
use std::path::Path;

/// Load and validate config from the platform default path.
///
/// A missing file yields the defaults.
pub fn load_config() -> Result<GrowstreetConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<GrowstreetConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GrowstreetConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&GrowstreetConfig::default());
        assert!(json.contains("\"breakpoints\""));
        assert!(json.contains("\"widths\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"info\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&GrowstreetConfig::default());
        let parsed: GrowstreetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.breakpoints.widths, vec![480, 768, 992, 1280, 1536]);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn load_config_from_rejects_invalid_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "[breakpoints]\nwidths = [768, 480]\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn only_load_config_from_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "[breakpoints]\nwidths = [0]\n").unwrap();

        let parsed = toml_loader::load_from_path(&path).unwrap();
        assert_eq!(parsed.breakpoints.widths, vec![0]);

        let ConfigError::ValidationError(msg) = load_config_from(&path).unwrap_err() else {
            panic!("expected validation error");
        };
        assert!(msg.contains("breakpoints.widths[0] = 0"));
    }

    #[test]
    fn load_config_from_accepts_custom_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "[breakpoints]\nwidths = [600, 1200]\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.breakpoints.widths, vec![600, 1200]);
    }
}
