//! JS object literal rendering for generated component modules.

use super::{EmotionRules, EmotionValue};
use crate::value::Scalar;

/// Render `rules` as a pretty-printed JS object literal.
///
/// Keys and string values are quoted; expressions are emitted verbatim.
pub(super) fn render_object(rules: &EmotionRules) -> String {
    let mut out = String::new();
    write_object(&mut out, rules, 0);
    out
}

fn write_object(out: &mut String, rules: &EmotionRules, depth: usize) {
    if rules.is_empty() {
        out.push_str("{}");
        return;
    }

    let indent = "  ".repeat(depth + 1);
    out.push_str("{\n");
    for (index, (key, value)) in rules.iter().enumerate() {
        out.push_str(&indent);
        out.push_str(&quote(key));
        out.push_str(": ");
        match value {
            EmotionValue::Scalar(Scalar::Str(s)) => out.push_str(&quote(s)),
            EmotionValue::Scalar(scalar) => out.push_str(&scalar.to_string()),
            EmotionValue::Expr(expr) => out.push_str(expr),
            EmotionValue::Map(map) => write_object(out, map, depth + 1),
        }
        if index + 1 < rules.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&"  ".repeat(depth));
    out.push('}');
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}
