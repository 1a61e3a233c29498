//! The author-facing style model.
//!
//! [`StyleDict`] is what a component hands over: keys as written, values
//! as a [`StyleValue`] tree. Nothing here is normalized or resolved yet;
//! see [`crate::resolve`] for that.

use crate::breakpoints::{Breakpoint, Breakpoints};
use crate::deps::{DependencySet, ImportVar};
use crate::var::Var;
use growstreet_common::StyleError;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Reserved object keys that mark a non-dict value in raw config.
pub const VAR_KEY: &str = "$var";
pub const TEMPLATE_KEY: &str = "$template";
pub const BREAKPOINTS_KEY: &str = "$breakpoints";

// =============================================================================
// VALUES
// =============================================================================

/// A literal CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Number(Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Str(s) => serializer.serialize_str(s),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// One piece of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Text(String),
    Var(Var),
}

/// Any value a style key can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Scalar(Scalar),
    /// Index 0 is the base value, index `i` applies from tier `i` up.
    Responsive(Vec<StyleValue>),
    Breakpoints(Breakpoints),
    /// Pseudo-selector or nested selector block.
    Nested(StyleDict),
    Var(Var),
    /// Text with reactive references spliced in.
    Template(Vec<TemplatePart>),
}

impl StyleValue {
    /// Every dependency reachable from this value.
    pub fn dependencies(&self) -> DependencySet {
        let mut deps = DependencySet::new();
        self.collect_dependencies(&mut deps);
        deps
    }

    fn collect_dependencies(&self, deps: &mut DependencySet) {
        match self {
            StyleValue::Scalar(_) => {}
            StyleValue::Responsive(items) => {
                for item in items {
                    item.collect_dependencies(deps);
                }
            }
            StyleValue::Breakpoints(bps) => {
                for (_, value) in bps.iter() {
                    value.collect_dependencies(deps);
                }
            }
            StyleValue::Nested(dict) => {
                for (_, value) in dict.iter() {
                    value.collect_dependencies(deps);
                }
            }
            StyleValue::Var(var) => deps.merge(var.dependencies()),
            StyleValue::Template(parts) => {
                for part in parts {
                    if let TemplatePart::Var(var) = part {
                        deps.merge(var.dependencies());
                    }
                }
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Scalar(Scalar::Str(s))
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Scalar(Scalar::Number(n.into()))
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Scalar(Scalar::Number(n.into()))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(n) => StyleValue::Scalar(Scalar::Number(n)),
            None => StyleValue::Scalar(Scalar::Str(n.to_string())),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Scalar(Scalar::Bool(b))
    }
}

impl From<Var> for StyleValue {
    fn from(var: Var) -> Self {
        StyleValue::Var(var)
    }
}

impl From<StyleDict> for StyleValue {
    fn from(dict: StyleDict) -> Self {
        StyleValue::Nested(dict)
    }
}

impl From<Breakpoints> for StyleValue {
    fn from(bps: Breakpoints) -> Self {
        StyleValue::Breakpoints(bps)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(items: Vec<T>) -> Self {
        StyleValue::Responsive(items.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// STYLE DICT
// =============================================================================

/// An insertion-ordered style mapping as written by the author.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDict {
    entries: IndexMap<String, StyleValue>,
}

impl StyleDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleDict::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key`, replacing any earlier value for the same key as written.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Merge `other` into `self`; keys from `other` win.
    ///
    /// Dependencies ride inside the values, so they are unioned as a side
    /// effect of the merge.
    pub fn update(&mut self, other: StyleDict) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every dependency carried by the values of this dict.
    pub fn dependencies(&self) -> DependencySet {
        let mut deps = DependencySet::new();
        for value in self.entries.values() {
            deps.merge(&value.dependencies());
        }
        deps
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// =============================================================================
// RAW CONFIG
// =============================================================================

/// Convert author-supplied config into a [`StyleDict`].
///
/// Strings, numbers and booleans become scalars, arrays become responsive
/// lists and objects become nested dicts. Three single-purpose object forms
/// are recognized:
///
/// - `{"$var": "expr", "imports": {...}, "hooks": [...], "state": "..."}`
/// - `{"$template": ["1px solid ", {"$var": "colorMode"}]}`
/// - `{"$breakpoints": {"initial": ..., "md": ...}}`
///
/// `null` and malformed reserved forms are rejected with
/// [`StyleError::UnsupportedValue`].
pub fn build_style(raw: &Value) -> Result<StyleDict, StyleError> {
    match raw {
        Value::Object(map) => build_dict(map, ""),
        other => Err(StyleError::NotAMapping {
            kind: kind_name(other).to_string(),
        }),
    }
}

fn build_dict(map: &Map<String, Value>, path: &str) -> Result<StyleDict, StyleError> {
    let mut dict = StyleDict::new();
    for (key, value) in map {
        let child = join_path(path, key);
        dict.set(key.clone(), build_value(value, &child)?);
    }
    Ok(dict)
}

fn build_value(value: &Value, path: &str) -> Result<StyleValue, StyleError> {
    match value {
        Value::Null => Err(unsupported(path, "null")),
        Value::Bool(b) => Ok(StyleValue::Scalar(Scalar::Bool(*b))),
        Value::Number(n) => Ok(StyleValue::Scalar(Scalar::Number(n.clone()))),
        Value::String(s) => Ok(StyleValue::Scalar(Scalar::Str(s.clone()))),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let child = format!("{path}[{index}]");
                if item.is_array() {
                    return Err(unsupported(&child, "nested responsive list"));
                }
                out.push(build_value(item, &child)?);
            }
            Ok(StyleValue::Responsive(out))
        }
        Value::Object(map) => {
            if map.contains_key(VAR_KEY) {
                build_var(map, path).map(StyleValue::Var)
            } else if map.contains_key(TEMPLATE_KEY) {
                build_template(map, path)
            } else if map.contains_key(BREAKPOINTS_KEY) {
                build_breakpoints(map, path)
            } else {
                build_dict(map, path).map(StyleValue::Nested)
            }
        }
    }
}

fn build_var(map: &Map<String, Value>, path: &str) -> Result<Var, StyleError> {
    let mut expr = None;
    let mut deps = DependencySet::new();

    for (field, value) in map {
        match (field.as_str(), value) {
            (VAR_KEY, Value::String(s)) => expr = Some(s.clone()),
            ("state", Value::String(s)) => deps.add_state(s.clone()),
            ("hooks", Value::Array(hooks)) => {
                for hook in hooks {
                    match hook {
                        Value::String(h) => deps.add_hook(h.clone()),
                        other => {
                            return Err(unsupported(
                                path,
                                &format!("hook must be a string, got {}", kind_name(other)),
                            ))
                        }
                    }
                }
            }
            ("imports", Value::Object(libraries)) => {
                for (library, spec) in libraries {
                    for import in parse_imports(spec, path)? {
                        deps.add_import(library.clone(), import);
                    }
                }
            }
            (other, value) => {
                return Err(unsupported(
                    path,
                    &format!("invalid field '{other}' ({}) in {VAR_KEY}", kind_name(value)),
                ))
            }
        }
    }

    match expr {
        Some(expr) => Ok(Var::with_dependencies(expr, deps)),
        None => Err(unsupported(path, "missing expression in $var")),
    }
}

/// An import spec is a tag, an `ImportVar` object, or a list of either.
fn parse_imports(spec: &Value, path: &str) -> Result<Vec<ImportVar>, StyleError> {
    match spec {
        Value::String(tag) => Ok(vec![ImportVar::new(tag.clone())]),
        Value::Object(_) => serde_json::from_value::<ImportVar>(spec.clone())
            .map(|import| vec![import])
            .map_err(|e| unsupported(path, &format!("invalid import: {e}"))),
        Value::Array(items) => {
            let mut out = Vec::new();
            for item in items {
                if item.is_array() {
                    return Err(unsupported(path, "nested import list"));
                }
                out.extend(parse_imports(item, path)?);
            }
            Ok(out)
        }
        other => Err(unsupported(
            path,
            &format!("invalid import spec ({})", kind_name(other)),
        )),
    }
}

fn build_template(map: &Map<String, Value>, path: &str) -> Result<StyleValue, StyleError> {
    if map.len() != 1 {
        return Err(unsupported(path, "$template takes no other fields"));
    }
    let Some(Value::Array(raw_parts)) = map.get(TEMPLATE_KEY) else {
        return Err(unsupported(path, "$template must be a list"));
    };

    let mut parts = Vec::with_capacity(raw_parts.len());
    for (index, part) in raw_parts.iter().enumerate() {
        let child = format!("{path}[{index}]");
        match part {
            Value::String(text) => parts.push(TemplatePart::Text(text.clone())),
            Value::Number(n) => parts.push(TemplatePart::Text(n.to_string())),
            Value::Object(obj) if obj.contains_key(VAR_KEY) => {
                parts.push(TemplatePart::Var(build_var(obj, &child)?))
            }
            other => {
                return Err(unsupported(
                    &child,
                    &format!("template part must be text or $var, got {}", kind_name(other)),
                ))
            }
        }
    }
    Ok(StyleValue::Template(parts))
}

fn build_breakpoints(map: &Map<String, Value>, path: &str) -> Result<StyleValue, StyleError> {
    if map.len() != 1 {
        return Err(unsupported(path, "$breakpoints takes no other fields"));
    }
    let Some(Value::Object(entries)) = map.get(BREAKPOINTS_KEY) else {
        return Err(unsupported(path, "$breakpoints must be a mapping"));
    };

    let mut bps = Breakpoints::new();
    for (key, value) in entries {
        let child = join_path(path, key);
        bps.insert(Breakpoint::parse(key), build_value(value, &child)?);
    }
    Ok(StyleValue::Breakpoints(bps))
}

fn unsupported(path: &str, kind: &str) -> StyleError {
    StyleError::UnsupportedValue {
        path: path.to_string(),
        kind: kind.to_string(),
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
