use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("unsupported style value at '{path}': {kind}")]
    UnsupportedValue { path: String, kind: String },

    #[error("style config must be a mapping, got {kind}")]
    NotAMapping { kind: String },

    #[error("invalid breakpoint table: {0}")]
    InvalidBreakpoints(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GrowstreetError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("input error: {0}")]
    Input(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_error_display() {
        let err = StyleError::UnsupportedValue {
            path: "_hover.color".into(),
            kind: "null".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported style value at '_hover.color': null"
        );

        let err = StyleError::NotAMapping {
            kind: "array".into(),
        };
        assert_eq!(err.to_string(), "style config must be a mapping, got array");

        let err = StyleError::InvalidBreakpoints("widths must ascend".into());
        assert_eq!(
            err.to_string(),
            "invalid breakpoint table: widths must ascend"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("breakpoints.widths is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: breakpoints.widths is empty"
        );
    }

    #[test]
    fn growstreet_error_from_style() {
        let style_err = StyleError::NotAMapping {
            kind: "string".into(),
        };
        let err: GrowstreetError = style_err.into();
        assert!(matches!(err, GrowstreetError::Style(_)));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn growstreet_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GrowstreetError = config_err.into();
        assert!(matches!(err, GrowstreetError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn growstreet_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GrowstreetError = io_err.into();
        assert!(matches!(err, GrowstreetError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn growstreet_error_other_variants() {
        let err = GrowstreetError::Input("expected .json or .yaml".into());
        assert_eq!(err.to_string(), "input error: expected .json or .yaml");

        let err = GrowstreetError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
