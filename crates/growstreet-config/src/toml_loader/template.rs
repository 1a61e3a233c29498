//! Default TOML config template with inline documentation comments.

/// Default TOML config content with comments.
pub fn default_config_toml() -> &'static str {
    r##"# Grow Street style compiler configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[breakpoints]
# Minimum widths in px where each tier (xs, sm, md, lg, xl, ...) starts.
# Ascending, 1-8 entries, each 1-10000.
widths = [480, 768, 992, 1280, 1536]

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
