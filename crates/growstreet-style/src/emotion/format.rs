//! Resolved style to Emotion style object.

use super::{EmotionRules, EmotionStyle, EmotionValue};
use crate::breakpoints::{media_query, width_in_px, Breakpoint, BreakpointTable};
use std::cmp::Ordering;
use crate::key::to_kebab_case;
use crate::resolve::{ResolvedDict, ResolvedValue, Style};

/// Rewrite a pseudo-selector key into an Emotion nesting selector.
///
/// `_hover` and `_firstChild` become `&:hover` and `&:first-child`;
/// native keys such as `:focus` or `::placeholder` get a `&` prepended.
/// Everything else is returned unchanged.
pub fn format_pseudo_selector(key: &str) -> String {
    let mut prefix = None;
    let mut name = key;
    if let Some(rest) = name.strip_prefix('_') {
        prefix = Some("&:");
        name = rest;
    }
    if name.starts_with(':') {
        prefix = Some("&");
    }
    match prefix {
        Some(prefix) => format!("{prefix}{}", to_kebab_case(name)),
        None => key.to_string(),
    }
}

fn is_pseudo(key: &str) -> bool {
    key.starts_with("&:")
}

/// Format a resolved style for Emotion.
///
/// Returns `None` when nothing is left to render, so callers can tell
/// "no style" apart from an empty object.
pub fn format_as_emotion(style: &Style, table: &BreakpointTable) -> Option<EmotionStyle> {
    let rules = format_rules(style.rules(), table);
    if rules.is_empty() {
        tracing::debug!("style formatted to nothing");
        return None;
    }
    Some(EmotionStyle::new(rules, style.dependencies().clone()))
}

/// Format one level of a resolved dict. Nested dicts recurse and keep
/// their key even when they come out empty.
pub fn format_rules(dict: &ResolvedDict, table: &BreakpointTable) -> EmotionRules {
    let mut level = Level::default();
    for (key, value) in dict {
        level.push(format_pseudo_selector(key), value, table);
    }
    level.finish()
}

// =============================================================================
// LEVEL
// =============================================================================

/// One `@media` block being collected.
struct MediaBlock {
    /// `None` when the width unit has no fixed pixel size.
    px: Option<f64>,
    query: String,
    rules: EmotionRules,
}

/// Plain rules of one nesting level plus the media blocks it will emit.
///
/// Media blocks are appended after the plain rules in ascending width,
/// with one block per distinct query. Widths in units other than `px`,
/// `em` or `rem` follow the rest in the order they were first seen.
#[derive(Default)]
struct Level {
    rules: EmotionRules,
    media: Vec<MediaBlock>,
}

impl Level {
    fn push(&mut self, key: String, value: &ResolvedValue, table: &BreakpointTable) {
        match value {
            ResolvedValue::Scalar(scalar) => {
                merge_entry(&mut self.rules, key, EmotionValue::Scalar(scalar.clone()))
            }
            ResolvedValue::Expr(expr) => {
                merge_entry(&mut self.rules, key, EmotionValue::Expr(expr.clone()))
            }
            ResolvedValue::Nested(dict) => {
                let inner = format_rules(dict, table);
                merge_entry(&mut self.rules, key, EmotionValue::Map(inner));
            }
            ResolvedValue::Responsive(items) => {
                let entries = items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (Breakpoint::from_position(index), value));
                self.push_responsive(key, entries, table);
            }
            ResolvedValue::Breakpoints(entries) => {
                let entries = entries.iter().map(|(bp, value)| (bp.clone(), value));
                self.push_responsive(key, entries, table);
            }
        }
    }

    fn push_responsive<'a>(
        &mut self,
        key: String,
        entries: impl Iterator<Item = (Breakpoint, &'a ResolvedValue)>,
        table: &BreakpointTable,
    ) {
        if is_pseudo(&key) {
            // Media queries live inside the pseudo block.
            let mut inner = Level::default();
            for (bp, value) in entries {
                let rules = match value {
                    ResolvedValue::Nested(dict) => format_rules(dict, table),
                    other => single(&key, other, table),
                };
                inner.place(&bp, rules, table);
            }
            merge_entry(&mut self.rules, key, EmotionValue::Map(inner.finish()));
        } else {
            for (bp, value) in entries {
                let rules = single(&key, value, table);
                self.place(&bp, rules, table);
            }
        }
    }

    /// Put the rules for one breakpoint where they belong.
    fn place(&mut self, bp: &Breakpoint, rules: EmotionRules, table: &BreakpointTable) {
        if *bp == Breakpoint::Base {
            merge_all(&mut self.rules, rules);
            return;
        }

        let Some(width) = table.min_width(bp) else {
            tracing::warn!(
                breakpoint = %bp,
                tiers = table.len(),
                "dropping responsive value past the end of the breakpoint table"
            );
            return;
        };

        let query = media_query(&width);
        match self.media.iter_mut().find(|block| block.query == query) {
            Some(block) => merge_all(&mut block.rules, rules),
            None => self.media.push(MediaBlock {
                px: width_in_px(&width),
                query,
                rules,
            }),
        }
    }

    fn finish(mut self) -> EmotionRules {
        self.media.sort_by(|a, b| match (a.px, b.px) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        for block in self.media {
            merge_entry(&mut self.rules, block.query, EmotionValue::Map(block.rules));
        }
        self.rules
    }
}

/// The rules a single `key: value` pair produces on its own.
fn single(key: &str, value: &ResolvedValue, table: &BreakpointTable) -> EmotionRules {
    let mut level = Level::default();
    level.push(key.to_string(), value, table);
    level.finish()
}

/// Insert `value` under `key`; two maps merge recursively, otherwise the
/// new value replaces the old one in place.
fn merge_entry(rules: &mut EmotionRules, key: String, value: EmotionValue) {
    match value {
        EmotionValue::Map(incoming) => match rules.get_mut(&key) {
            Some(EmotionValue::Map(existing)) => merge_all(existing, incoming),
            _ => {
                rules.insert(key, EmotionValue::Map(incoming));
            }
        },
        value => {
            rules.insert(key, value);
        }
    }
}

fn merge_all(target: &mut EmotionRules, source: EmotionRules) {
    for (key, value) in source {
        merge_entry(target, key, value);
    }
}
