//! Value resolution.
//!
//! Walks a [`StyleDict`], normalizes every key, turns reactive references
//! into JS expressions and collects what they depend on. The output is a
//! plain [`ResolvedDict`] with the [`DependencySet`] returned beside it.

use crate::breakpoints::{factorize, Breakpoint};
use crate::deps::DependencySet;
use crate::key::normalize_key;
use crate::value::{Scalar, StyleDict, StyleValue, TemplatePart};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Resolved style mapping keyed by canonical property name.
pub type ResolvedDict = IndexMap<String, ResolvedValue>;

/// A style value with every key normalized and every reference rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Scalar(Scalar),
    /// A JS expression, emitted unquoted by the code generator.
    Expr(String),
    Nested(ResolvedDict),
    Responsive(Vec<ResolvedValue>),
    /// Factorized breakpoint map: one entry per breakpoint, base first.
    Breakpoints(Vec<(Breakpoint, ResolvedValue)>),
}

impl Serialize for ResolvedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedValue::Scalar(scalar) => scalar.serialize(serializer),
            ResolvedValue::Expr(expr) => serializer.serialize_str(&format!("{{{expr}}}")),
            ResolvedValue::Nested(dict) => dict.serialize(serializer),
            ResolvedValue::Responsive(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ResolvedValue::Breakpoints(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (bp, value) in entries {
                    map.serialize_entry(&bp.label(), value)?;
                }
                map.end()
            }
        }
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolve a style dict into canonical keys and concrete values.
///
/// Shorthand keys write the same value to every property they expand to.
/// When two keys land on the same property the later one wins.
pub fn resolve(dict: &StyleDict) -> (ResolvedDict, DependencySet) {
    let mut out = ResolvedDict::new();
    let mut deps = DependencySet::new();

    for (key, value) in dict.iter() {
        let (resolved, value_deps) = resolve_value(value);
        deps.merge(&value_deps);
        assign(&mut out, normalize_key(key), resolved);
    }

    (out, deps)
}

/// Resolve a single value.
pub fn resolve_value(value: &StyleValue) -> (ResolvedValue, DependencySet) {
    match value {
        StyleValue::Scalar(scalar) => (ResolvedValue::Scalar(scalar.clone()), DependencySet::new()),
        StyleValue::Var(var) => (
            ResolvedValue::Expr(var.expr().to_string()),
            var.dependencies().clone(),
        ),
        StyleValue::Template(parts) => resolve_template(parts),
        StyleValue::Nested(dict) => {
            let (resolved, deps) = resolve(dict);
            (ResolvedValue::Nested(resolved), deps)
        }
        StyleValue::Responsive(items) => {
            let (resolved, item_deps): (Vec<_>, Vec<_>) = items.iter().map(resolve_value).unzip();
            (
                ResolvedValue::Responsive(resolved),
                DependencySet::merged(&item_deps),
            )
        }
        StyleValue::Breakpoints(bps) => {
            let mut deps = DependencySet::new();
            let entries = bps.iter().map(|(bp, value)| {
                let (resolved, value_deps) = resolve_value(value);
                deps.merge(&value_deps);
                (bp.clone(), resolved)
            });
            let factorized = factorize(entries, merge_resolved);
            (ResolvedValue::Breakpoints(factorized), deps)
        }
    }
}

/// Render an interpolated string as a JS template literal.
///
/// A template without references collapses to a plain string.
fn resolve_template(parts: &[TemplatePart]) -> (ResolvedValue, DependencySet) {
    let has_refs = parts.iter().any(|p| matches!(p, TemplatePart::Var(_)));
    if !has_refs {
        let text: String = parts
            .iter()
            .filter_map(|p| match p {
                TemplatePart::Text(text) => Some(text.as_str()),
                TemplatePart::Var(_) => None,
            })
            .collect();
        return (ResolvedValue::Scalar(Scalar::Str(text)), DependencySet::new());
    }

    let mut literal = String::from("`");
    let mut deps = DependencySet::new();
    for part in parts {
        match part {
            TemplatePart::Text(text) => literal.push_str(&escape_template_text(text)),
            TemplatePart::Var(var) => {
                literal.push_str("${");
                literal.push_str(var.expr());
                literal.push('}');
                deps.merge(var.dependencies());
            }
        }
    }
    literal.push('`');
    (ResolvedValue::Expr(literal), deps)
}

fn escape_template_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Write `value` under each key, cloning for all but the last.
fn assign(out: &mut ResolvedDict, keys: Vec<String>, value: ResolvedValue) {
    let mut keys = keys.into_iter().peekable();
    while let Some(key) = keys.next() {
        if keys.peek().is_some() {
            out.insert(key, value.clone());
        } else {
            out.insert(key, value);
            break;
        }
    }
}

/// Combine two values that target the same breakpoint.
///
/// Nested dicts merge key by key (recursively); anything else is replaced
/// by the later value.
pub(crate) fn merge_resolved(existing: &mut ResolvedValue, later: ResolvedValue) {
    match (existing, later) {
        (ResolvedValue::Nested(target), ResolvedValue::Nested(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(slot) => merge_resolved(slot, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (slot, later) => *slot = later,
    }
}

// =============================================================================
// STYLE
// =============================================================================

/// A resolved style together with the dependencies it needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    rules: ResolvedDict,
    deps: DependencySet,
}

impl Style {
    pub fn new(dict: &StyleDict) -> Self {
        let (rules, deps) = resolve(dict);
        tracing::trace!(
            rules = rules.len(),
            imports = deps.imports.len(),
            hooks = deps.hooks.len(),
            "resolved style"
        );
        Self { rules, deps }
    }

    pub fn from_parts(rules: ResolvedDict, deps: DependencySet) -> Self {
        Self { rules, deps }
    }

    pub fn rules(&self) -> &ResolvedDict {
        &self.rules
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.deps
    }

    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.rules.get(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Merge another style in; its rules win and dependencies are unioned.
    pub fn update(&mut self, other: Style) {
        self.rules.extend(other.rules);
        self.deps.merge(&other.deps);
    }

    /// Resolve and set a single key.
    pub fn insert(&mut self, key: &str, value: impl Into<StyleValue>) {
        let (resolved, deps) = resolve_value(&value.into());
        self.deps.merge(&deps);
        assign(&mut self.rules, normalize_key(key), resolved);
    }

    pub fn into_parts(self) -> (ResolvedDict, DependencySet) {
        (self.rules, self.deps)
    }
}

impl From<&StyleDict> for Style {
    fn from(dict: &StyleDict) -> Self {
        Style::new(dict)
    }
}

impl From<StyleDict> for Style {
    fn from(dict: StyleDict) -> Self {
        Style::new(&dict)
    }
}
