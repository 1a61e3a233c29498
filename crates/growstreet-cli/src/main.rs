mod cli;
mod input;
mod render;

use growstreet_common::{GrowstreetError, Result};
use growstreet_config::{toml_loader, GrowstreetConfig};
use growstreet_style::{build_style, format_as_emotion, BreakpointTable, Style};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

const DEFAULT_DIRECTIVE: &str = "growstreet=info";

fn main() {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let config = load_config(&args);

    let directive = log_directive(&args, config.as_ref().ok());
    let filter = match (&args.log_level, std::env::var_os("RUST_LOG")) {
        (None, Some(_)) => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let result = config.and_then(|config| run(&args, &config));
    if let Err(e) = result {
        eprintln!("stylec: {e}");
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<GrowstreetConfig> {
    if args.init_config {
        return Ok(GrowstreetConfig::default());
    }
    let config = match &args.config {
        Some(path) => growstreet_config::load_config_from(path)?,
        None => growstreet_config::load_config()?,
    };
    Ok(config)
}

/// `--log-level` wins over the config file. A bare level is scoped to the
/// workspace crates. `RUST_LOG` is checked by the caller.
fn log_directive(args: &Args, config: Option<&GrowstreetConfig>) -> String {
    match (&args.log_level, config) {
        (Some(level), _) if level.contains('=') => level.clone(),
        (Some(level), _) => format!("growstreet={level}"),
        (None, Some(config)) => config.logging.level.directive(),
        (None, None) => DEFAULT_DIRECTIVE.to_string(),
    }
}

fn run(args: &Args, config: &GrowstreetConfig) -> Result<()> {
    if args.init_config {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => toml_loader::default_config_path()?,
        };
        toml_loader::create_default_config(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let Some(input) = &args.input else {
        return Err(GrowstreetError::Input("no input file given".into()));
    };

    let table = BreakpointTable::new(config.breakpoints.widths.clone())?;
    let raw = input::read_style(input)?;
    let dict = build_style(&raw)?;
    let style = Style::new(&dict);
    tracing::debug!(input = %input.display(), keys = dict.len(), "compiling");

    let output = if args.resolved {
        render::render_resolved(&style)?
    } else {
        let emotion = format_as_emotion(&style, &table);
        render::render_emotion(emotion.as_ref(), args.format)?
    };
    println!("{output}");
    Ok(())
}
