//! Emotion CSS-in-JS output.
//!
//! Turns a resolved [`Style`](crate::Style) into the nested object Emotion
//! expects: pseudo-selector keys become `&:...` selectors and responsive
//! values become `@media` blocks.

mod format;
mod js;

pub use format::{format_as_emotion, format_pseudo_selector, format_rules};

use crate::deps::DependencySet;
use crate::value::Scalar;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Emotion style object: selector or property name to value.
pub type EmotionRules = IndexMap<String, EmotionValue>;

/// A value in an Emotion style object.
#[derive(Debug, Clone, PartialEq)]
pub enum EmotionValue {
    Scalar(Scalar),
    /// JS expression, emitted without quotes.
    Expr(String),
    Map(EmotionRules),
}

impl EmotionValue {
    pub fn as_map(&self) -> Option<&EmotionRules> {
        match self {
            EmotionValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for EmotionValue {
    fn from(s: &str) -> Self {
        EmotionValue::Scalar(Scalar::Str(s.to_string()))
    }
}

impl Serialize for EmotionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EmotionValue::Scalar(scalar) => scalar.serialize(serializer),
            EmotionValue::Expr(expr) => serializer.serialize_str(&format!("{{{expr}}}")),
            EmotionValue::Map(map) => map.serialize(serializer),
        }
    }
}

/// Formatter output: the style object plus what it needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionStyle {
    style: EmotionRules,
    #[serde(skip_serializing_if = "DependencySet::is_empty")]
    dependencies: DependencySet,
}

impl EmotionStyle {
    pub(crate) fn new(style: EmotionRules, dependencies: DependencySet) -> Self {
        Self {
            style,
            dependencies,
        }
    }

    pub fn rules(&self) -> &EmotionRules {
        &self.style
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    pub fn get(&self, key: &str) -> Option<&EmotionValue> {
        self.style.get(key)
    }

    pub fn len(&self) -> usize {
        self.style.len()
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_empty()
    }

    /// Render the style object as a JS object literal.
    pub fn to_js(&self) -> String {
        js::render_object(&self.style)
    }

    pub fn into_parts(self) -> (EmotionRules, DependencySet) {
        (self.style, self.dependencies)
    }
}
