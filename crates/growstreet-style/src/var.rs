//! Reactive references.
//!
//! A [`Var`] is a JS expression evaluated in the browser at render time,
//! together with the imports and hooks the expression needs. The color-mode
//! bindings below are the built-in ones every page gets for free.

use crate::deps::{DependencySet, ImportVar};

/// Module that exports the color-mode React context.
pub const CONTEXTS_PATH: &str = "/utils/context";

pub const COLOR_MODE_NAME: &str = "colorMode";
pub const RESOLVED_COLOR_MODE_NAME: &str = "resolvedColorMode";
pub const TOGGLE_COLOR_MODE_NAME: &str = "toggleColorMode";
pub const SET_COLOR_MODE_NAME: &str = "setColorMode";

/// A reactive reference: a JS expression plus what it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    expr: String,
    deps: DependencySet,
}

impl Var {
    /// A bare expression with no dependencies.
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            deps: DependencySet::new(),
        }
    }

    pub fn with_dependencies(expr: impl Into<String>, deps: DependencySet) -> Self {
        Self {
            expr: expr.into(),
            deps,
        }
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.deps
    }

    /// Same dependencies, different expression.
    pub fn map_expr(&self, f: impl FnOnce(&str) -> String) -> Self {
        Self {
            expr: f(&self.expr),
            deps: self.deps.clone(),
        }
    }
}

// =============================================================================
// COLOR MODE
// =============================================================================

/// Color mode the page can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    System,
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::System => "system",
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// A binding destructured from `ColorModeContext`.
fn color_mode_var(name: &str) -> Var {
    let deps = DependencySet::new()
        .with_import(CONTEXTS_PATH, ImportVar::new("ColorModeContext"))
        .with_import("react", ImportVar::new("useContext"))
        .with_hook(format!("const {{ {name} }} = useContext(ColorModeContext)"));
    Var::with_dependencies(name, deps)
}

/// Current color mode (`"light"`, `"dark"` or `"system"`).
pub fn color_mode() -> Var {
    color_mode_var(COLOR_MODE_NAME)
}

/// Effective color mode after resolving `"system"` (`"light"` or `"dark"`).
pub fn resolved_color_mode() -> Var {
    color_mode_var(RESOLVED_COLOR_MODE_NAME)
}

/// Callback that flips between light and dark.
pub fn toggle_color_mode() -> Var {
    color_mode_var(TOGGLE_COLOR_MODE_NAME)
}

/// Callback that switches to `mode`.
pub fn set_color_mode(mode: ColorMode) -> Var {
    color_mode_var(SET_COLOR_MODE_NAME)
        .map_expr(|setter| format!("() => {setter}(\"{}\")", mode.as_str()))
}
