//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod breakpoints;
mod logging;

pub use breakpoints::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowstreetConfig {
    pub breakpoints: BreakpointsConfig,
    pub logging: LoggingConfig,
}
