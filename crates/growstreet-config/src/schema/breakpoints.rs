//! Responsive breakpoint table configuration.

use serde::{Deserialize, Serialize};

/// Tier thresholds in pixels, ascending. Entry `i` is where tier `i + 1`
/// starts applying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointsConfig {
    /// Valid: 1-8 entries, each 1-10000, strictly ascending.
    pub widths: Vec<u32>,
}

impl Default for BreakpointsConfig {
    fn default() -> Self {
        Self {
            widths: vec![480, 768, 992, 1280, 1536],
        }
    }
}
