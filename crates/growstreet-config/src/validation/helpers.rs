//! Shared range-validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if a list length is outside `[min, max]`.
pub(crate) fn validate_len(errors: &mut Vec<String>, name: &str, len: usize, min: usize, max: usize) {
    if len < min || len > max {
        errors.push(format!("{name} has {len} entries, expected {min} to {max}"));
    }
}
