//! Style compiler for Emotion CSS-in-JS.
//!
//! A style is described as a [`StyleDict`]: property names in any common
//! casing, shorthands such as `paddingX`, pseudo-selector keys like
//! `_hover`, responsive lists and breakpoint maps, and reactive [`Var`]
//! references. Compilation runs in three stages:
//!
//! 1. [`key`] normalizes and expands property names.
//! 2. [`resolve`](mod@resolve) turns values into plain data plus JS
//!    expressions and collects the [`DependencySet`] they need.
//! 3. [`emotion`] rewrites pseudo selectors and moves responsive values
//!    into `@media` blocks.
//!
//! ```
//! use growstreet_style::{compile_for_emotion, StyleDict};
//!
//! let dict = StyleDict::new().with("color", vec!["black", "white"]);
//! let style = compile_for_emotion(&dict).unwrap();
//! assert!(style.get("@media screen and (min-width: 480px)").is_some());
//! ```

pub mod breakpoints;
pub mod deps;
pub mod emotion;
pub mod key;
pub mod presets;
pub mod resolve;
pub mod value;
pub mod var;

pub use breakpoints::{Breakpoint, BreakpointTable, Breakpoints, DEFAULT_TABLE};
pub use deps::{DependencySet, ImportVar};
pub use emotion::{format_as_emotion, EmotionRules, EmotionStyle, EmotionValue};
pub use key::normalize_key;
pub use resolve::{resolve, ResolvedDict, ResolvedValue, Style};
pub use value::{build_style, Scalar, StyleDict, StyleValue, TemplatePart};
pub use var::{ColorMode, Var};

use growstreet_common::StyleError;
use serde_json::Value;

/// Compile a style dict against the default breakpoint table.
pub fn compile_for_emotion(dict: &StyleDict) -> Option<EmotionStyle> {
    compile_for_emotion_with(dict, &DEFAULT_TABLE)
}

/// Compile a style dict against a custom breakpoint table.
pub fn compile_for_emotion_with(dict: &StyleDict, table: &BreakpointTable) -> Option<EmotionStyle> {
    let style = Style::new(dict);
    tracing::debug!(
        keys = dict.len(),
        resolved = style.len(),
        tiers = table.len(),
        "compiling style"
    );
    format_as_emotion(&style, table)
}

/// Build, resolve and format a raw JSON style in one step.
pub fn convert_dict_to_style_and_format_emotion(
    raw: &Value,
) -> Result<Option<EmotionStyle>, StyleError> {
    let dict = build_style(raw)?;
    Ok(compile_for_emotion(&dict))
}
