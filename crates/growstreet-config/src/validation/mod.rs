//! Full configuration validation.
//!
//! Each section has its own check; all errors are collected into a single
//! `ConfigError::ValidationError`.

mod breakpoints;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::GrowstreetConfig;
use growstreet_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GrowstreetConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    breakpoints::validate_breakpoints(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
