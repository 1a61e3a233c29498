//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

fn with_widths(widths: Vec<u32>) -> GrowstreetConfig {
    let mut config = GrowstreetConfig::default();
    config.breakpoints.widths = widths;
    config
}

#[test]
fn default_config_validates() {
    assert!(validate(&GrowstreetConfig::default()).is_ok());
}

#[test]
fn single_tier_validates() {
    assert!(validate(&with_widths(vec![600])).is_ok());
}

#[test]
fn catches_empty_table() {
    let err = validate(&with_widths(vec![])).unwrap_err().to_string();
    assert!(err.contains("breakpoints.widths has 0 entries"));
}

#[test]
fn catches_too_many_tiers() {
    let err = validate(&with_widths((1..=9).map(|i| i * 100).collect()))
        .unwrap_err()
        .to_string();
    assert!(err.contains("has 9 entries"));
}

#[test]
fn catches_zero_width() {
    let err = validate(&with_widths(vec![0, 480])).unwrap_err().to_string();
    assert!(err.contains("breakpoints.widths[0] = 0"));
}

#[test]
fn catches_width_too_large() {
    let err = validate(&with_widths(vec![480, 20_000])).unwrap_err().to_string();
    assert!(err.contains("breakpoints.widths[1] = 20000"));
}

#[test]
fn catches_descending_widths() {
    let err = validate(&with_widths(vec![768, 480])).unwrap_err().to_string();
    assert!(err.contains("strictly ascending"));
}

#[test]
fn catches_duplicate_widths() {
    let err = validate(&with_widths(vec![480, 480])).unwrap_err().to_string();
    assert!(err.contains("strictly ascending"));
}

#[test]
fn collects_multiple_errors() {
    let err = validate(&with_widths(vec![0, 20_000, 10])).unwrap_err();
    let ConfigError::ValidationError(msg) = err else {
        panic!("expected validation error");
    };
    assert!(msg.contains("widths[0]"));
    assert!(msg.contains("widths[1]"));
    assert!(msg.contains("strictly ascending"));
}
