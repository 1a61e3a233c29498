//! Output rendering for the compiled style.

use crate::cli::OutputFormat;
use growstreet_common::GrowstreetError;
use growstreet_style::{DependencySet, EmotionStyle, ResolvedDict, Style};
use serde::Serialize;

/// Resolved style as printed by `--resolved`.
#[derive(Serialize)]
struct ResolvedOutput<'a> {
    style: &'a ResolvedDict,
    #[serde(skip_serializing_if = "DependencySet::is_empty")]
    dependencies: &'a DependencySet,
}

pub fn render_resolved(style: &Style) -> Result<String, GrowstreetError> {
    let output = ResolvedOutput {
        style: style.rules(),
        dependencies: style.dependencies(),
    };
    to_pretty_json(&output)
}

/// Render formatter output. An absent style prints as `null`.
pub fn render_emotion(
    emotion: Option<&EmotionStyle>,
    format: OutputFormat,
) -> Result<String, GrowstreetError> {
    match format {
        OutputFormat::Json => to_pretty_json(&emotion),
        OutputFormat::Js => Ok(render_module(emotion)),
    }
}

/// A JS snippet: imports, hook declarations, then the style object.
fn render_module(emotion: Option<&EmotionStyle>) -> String {
    let Some(emotion) = emotion else {
        return "const style = null;".to_string();
    };

    let deps = emotion.dependencies();
    let mut out = String::new();
    for line in deps.import_lines() {
        out.push_str(&line);
        out.push_str(";\n");
    }
    if !deps.imports.is_empty() {
        out.push('\n');
    }
    for hook in &deps.hooks {
        out.push_str(hook);
        out.push_str(";\n");
    }
    out.push_str("const style = ");
    out.push_str(&emotion.to_js());
    out.push(';');
    out
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, GrowstreetError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GrowstreetError::Other(format!("failed to serialize output: {e}")))
}
