//! Reading style files.

use growstreet_common::GrowstreetError;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read a style document. `.yaml`/`.yml` files and stdin (`-`) are parsed
/// as YAML, which also accepts JSON; anything else is parsed as JSON.
pub fn read_style(path: &Path) -> Result<Value, GrowstreetError> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return parse_yaml(&content, "stdin");
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GrowstreetError::Input(format!("failed to read {}: {e}", path.display()))
    })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => parse_yaml(&content, &origin),
        _ => parse_json(&content, &origin),
    }
}

pub fn parse_json(content: &str, origin: &str) -> Result<Value, GrowstreetError> {
    serde_json::from_str(content)
        .map_err(|e| GrowstreetError::Input(format!("invalid JSON in {origin}: {e}")))
}

pub fn parse_yaml(content: &str, origin: &str) -> Result<Value, GrowstreetError> {
    serde_yaml::from_str(content)
        .map_err(|e| GrowstreetError::Input(format!("invalid YAML in {origin}: {e}")))
}
