//! Breakpoint table validation.

use crate::schema::GrowstreetConfig;

use super::helpers::{validate_len, validate_range};

pub(crate) const MAX_TIERS: usize = 8;
pub(crate) const MAX_WIDTH: u32 = 10_000;

/// Validate the breakpoint table: size, per-entry range and order.
pub(crate) fn validate_breakpoints(errors: &mut Vec<String>, config: &GrowstreetConfig) {
    let widths = &config.breakpoints.widths;
    validate_len(errors, "breakpoints.widths", widths.len(), 1, MAX_TIERS);

    for (index, width) in widths.iter().enumerate() {
        validate_range(
            errors,
            &format!("breakpoints.widths[{index}]"),
            *width,
            1,
            MAX_WIDTH,
        );
    }

    for (index, pair) in widths.windows(2).enumerate() {
        if pair[0] >= pair[1] {
            errors.push(format!(
                "breakpoints.widths must be strictly ascending: [{index}] = {} then [{}] = {}",
                pair[0],
                index + 1,
                pair[1]
            ));
        }
    }
}
