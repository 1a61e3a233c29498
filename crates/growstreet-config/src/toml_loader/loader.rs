//! Core TOML config loading: read from path or platform default.

use crate::schema::GrowstreetConfig;
use growstreet_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. Values are not validated here;
/// see [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<GrowstreetConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: GrowstreetConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/growstreet/style.toml`
/// On macOS: `~/Library/Application Support/growstreet/style.toml`
///
/// A missing file, or a platform with no config directory, yields the
/// defaults without touching the filesystem.
pub fn load_default() -> Result<GrowstreetConfig, ConfigError> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("{e}, using default config");
            return Ok(GrowstreetConfig::default());
        }
    };

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(GrowstreetConfig::default())
        }
        Err(e) => Err(e),
    }
}
