use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// stylec: compile a style dictionary into an Emotion style object.
#[derive(Parser, Debug)]
#[command(name = "stylec", version, about)]
pub struct Args {
    /// Style file (`.json`, `.yaml` or `.yml`), or `-` for stdin.
    #[arg(required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print the resolved style instead of the Emotion object.
    #[arg(long)]
    pub resolved: bool,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// `tracing` filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write the default config file (to `--config` or the default path) and exit.
    #[arg(long)]
    pub init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Js,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_with_defaults() {
        let args = Args::try_parse_from(["stylec", "style.json"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("style.json")));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.resolved);
        assert!(!args.init_config);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "stylec",
            "style.yaml",
            "--config",
            "custom.toml",
            "--format",
            "js",
            "--resolved",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.format, OutputFormat::Js);
        assert!(args.resolved);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn input_required_without_init_config() {
        assert!(Args::try_parse_from(["stylec"]).is_err());
        let args = Args::try_parse_from(["stylec", "--init-config"]).unwrap();
        assert!(args.init_config);
        assert!(args.input.is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["stylec", "a.json", "--format", "css"]).is_err());
    }
}
