//! Responsive breakpoints.
//!
//! A responsive value is written either as a list (index 0 is the base
//! value, index `i` applies from the `i`-th threshold up) or as a
//! [`Breakpoints`] map keyed by tier name. Both end up as
//! `(Breakpoint, value)` pairs that the formatter turns into
//! `@media screen and (min-width: ...)` blocks.

use crate::value::StyleValue;
use growstreet_common::StyleError;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

/// Tier names, in ascending width order. `xs` is tier 1.
pub const TIER_NAMES: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

/// Default tier thresholds in pixels (30em, 48em, 62em, 80em, 96em).
pub const DEFAULT_BREAKPOINTS: [u32; 5] = [480, 768, 992, 1280, 1536];

/// The table every compile uses unless given another one.
pub static DEFAULT_TABLE: BreakpointTable = BreakpointTable {
    widths: Cow::Borrowed(&DEFAULT_BREAKPOINTS),
};

// =============================================================================
// BREAKPOINT
// =============================================================================

/// Where a responsive entry applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    /// No media query: applies at every width.
    Base,
    /// Applies from the `n`-th threshold of the table up (1-based).
    Tier(usize),
    /// Applies from an explicit CSS width such as `40em`.
    Custom(String),
}

impl Breakpoint {
    /// Breakpoint for position `index` of a responsive list.
    pub fn from_position(index: usize) -> Self {
        if index == 0 {
            Breakpoint::Base
        } else {
            Breakpoint::Tier(index)
        }
    }

    /// Parse a breakpoint map key.
    ///
    /// Accepts `initial`/`base`, tier names, plain indices (`0`, `2`) and
    /// falls back to treating anything else as a CSS width.
    pub fn parse(key: &str) -> Self {
        let key = key.trim();
        if key == "initial" || key == "base" {
            return Breakpoint::Base;
        }
        if let Some(pos) = TIER_NAMES.iter().position(|name| *name == key) {
            return Breakpoint::Tier(pos + 1);
        }
        if let Ok(index) = key.parse::<usize>() {
            return Breakpoint::from_position(index);
        }
        Breakpoint::Custom(key.to_string())
    }

    /// Human-facing name, the inverse of [`Breakpoint::parse`].
    pub fn label(&self) -> String {
        match self {
            Breakpoint::Base => "initial".to_string(),
            Breakpoint::Tier(n) => TIER_NAMES
                .get(n.wrapping_sub(1))
                .map(|name| (*name).to_string())
                .unwrap_or_else(|| n.to_string()),
            Breakpoint::Custom(width) => width.clone(),
        }
    }

    /// Sort key: base first, then tiers ascending, then custom widths.
    pub(crate) fn order(&self) -> (u8, usize) {
        match self {
            Breakpoint::Base => (0, 0),
            Breakpoint::Tier(n) => (1, *n),
            Breakpoint::Custom(_) => (2, 0),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Regroup scattered breakpoint entries into one record per breakpoint.
///
/// Entries landing on the same breakpoint are combined with `merge` (the
/// existing value first, the later one second). The result is ordered with
/// [`Breakpoint::order`]; custom widths keep their insertion order.
pub(crate) fn factorize<T>(
    entries: impl IntoIterator<Item = (Breakpoint, T)>,
    mut merge: impl FnMut(&mut T, T),
) -> Vec<(Breakpoint, T)> {
    let mut out: Vec<(Breakpoint, T)> = Vec::new();
    for (bp, value) in entries {
        match out.iter_mut().find(|(existing, _)| *existing == bp) {
            Some((_, existing)) => merge(existing, value),
            None => out.push((bp, value)),
        }
    }
    out.sort_by_key(|(bp, _)| bp.order());
    out
}

// =============================================================================
// BREAKPOINTS MAP
// =============================================================================

/// A responsive value written per named breakpoint.
///
/// ```
/// use growstreet_style::Breakpoints;
///
/// let width = Breakpoints::new().initial("100%").md("50%");
/// assert_eq!(width.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakpoints {
    entries: Vec<(Breakpoint, StyleValue)>,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from optional per-tier values, skipping the missing ones.
    pub fn create(
        initial: Option<StyleValue>,
        xs: Option<StyleValue>,
        sm: Option<StyleValue>,
        md: Option<StyleValue>,
        lg: Option<StyleValue>,
        xl: Option<StyleValue>,
    ) -> Self {
        let slots = [initial, xs, sm, md, lg, xl];
        let entries = slots
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| value.map(|v| (Breakpoint::from_position(index), v)))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, breakpoint: Breakpoint, value: impl Into<StyleValue>) {
        self.entries.push((breakpoint, value.into()));
    }

    pub fn with(mut self, breakpoint: Breakpoint, value: impl Into<StyleValue>) -> Self {
        self.insert(breakpoint, value);
        self
    }

    pub fn initial(self, value: impl Into<StyleValue>) -> Self {
        self.with(Breakpoint::Base, value)
    }

    pub fn xs(self, value: impl Into<StyleValue>) -> Self {
        self.with(Breakpoint::Tier(1), value)
    }

    pub fn sm(self, value: impl Into<StyleValue>) -> Self {
        self.with(Breakpoint::Tier(2), value)
    }

    pub fn md(self, value: impl Into<StyleValue>) -> Self {
        self.with(Breakpoint::Tier(3), value)
    }

    pub fn lg(self, value: impl Into<StyleValue>) -> Self {
        self.with(Breakpoint::Tier(4), value)
    }

    pub fn xl(self, value: impl Into<StyleValue>) -> Self {
        self.with(Breakpoint::Tier(5), value)
    }

    pub fn custom(self, width: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.with(Breakpoint::Custom(width.into()), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Breakpoint, StyleValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// BREAKPOINT TABLE
// =============================================================================

/// Ascending pixel thresholds for tiers 1..=N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    widths: Cow<'static, [u32]>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl BreakpointTable {
    /// Build a table, rejecting empty, zero or non-ascending widths.
    pub fn new(widths: Vec<u32>) -> Result<Self, StyleError> {
        if widths.is_empty() {
            return Err(StyleError::InvalidBreakpoints(
                "at least one width is required".into(),
            ));
        }
        if widths.contains(&0) {
            return Err(StyleError::InvalidBreakpoints(
                "widths must be greater than zero".into(),
            ));
        }
        if let Some(pair) = widths.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(StyleError::InvalidBreakpoints(format!(
                "widths must be strictly ascending ({} then {})",
                pair[0], pair[1]
            )));
        }
        Ok(Self {
            widths: Cow::Owned(widths),
        })
    }

    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// CSS width expression for a breakpoint; `None` for the base and for
    /// tiers past the end of the table.
    pub fn min_width(&self, breakpoint: &Breakpoint) -> Option<String> {
        match breakpoint {
            Breakpoint::Base => None,
            Breakpoint::Tier(n) => self
                .widths
                .get(n.wrapping_sub(1))
                .map(|width| format!("{width}px")),
            Breakpoint::Custom(width) => Some(width.clone()),
        }
    }
}

/// Root font size `em` and `rem` widths are converted with.
const ROOT_FONT_PX: f64 = 16.0;

static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?|\.\d+)\s*(px|r?em)\s*$").unwrap());

/// Pixel value of a `px`, `em` or `rem` width; `None` for any other unit.
pub fn width_in_px(width_expr: &str) -> Option<f64> {
    let caps = WIDTH_RE.captures(width_expr)?;
    let value: f64 = caps[1].parse().ok()?;
    match &caps[2] {
        "px" => Some(value),
        _ => Some(value * ROOT_FONT_PX),
    }
}

/// Emotion key for a `min-width` media query.
pub fn media_query(width_expr: &str) -> String {
    format!("@media screen and (min-width: {width_expr})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_indices() {
        assert_eq!(Breakpoint::parse("initial"), Breakpoint::Base);
        assert_eq!(Breakpoint::parse("base"), Breakpoint::Base);
        assert_eq!(Breakpoint::parse("0"), Breakpoint::Base);
        assert_eq!(Breakpoint::parse("xs"), Breakpoint::Tier(1));
        assert_eq!(Breakpoint::parse("md"), Breakpoint::Tier(3));
        assert_eq!(Breakpoint::parse("xl"), Breakpoint::Tier(5));
        assert_eq!(Breakpoint::parse("2"), Breakpoint::Tier(2));
        assert_eq!(
            Breakpoint::parse("40em"),
            Breakpoint::Custom("40em".into())
        );
    }

    #[test]
    fn labels_round_trip() {
        for key in ["initial", "xs", "sm", "md", "lg", "xl", "40em"] {
            assert_eq!(Breakpoint::parse(key).label(), key);
        }
        assert_eq!(Breakpoint::Tier(7).label(), "7");
        assert_eq!(Breakpoint::Tier(0).label(), "0");
    }

    #[test]
    fn factorize_merges_and_orders() {
        let entries = vec![
            (Breakpoint::Tier(2), vec!["sm"]),
            (Breakpoint::Custom("40em".into()), vec!["custom"]),
            (Breakpoint::Base, vec!["base"]),
            (Breakpoint::Tier(2), vec!["sm again"]),
            (Breakpoint::Tier(1), vec!["xs"]),
        ];
        let out = factorize(entries, |existing, later| existing.extend(later));

        assert_eq!(
            out,
            vec![
                (Breakpoint::Base, vec!["base"]),
                (Breakpoint::Tier(1), vec!["xs"]),
                (Breakpoint::Tier(2), vec!["sm", "sm again"]),
                (Breakpoint::Custom("40em".into()), vec!["custom"]),
            ]
        );
    }

    #[test]
    fn create_skips_missing_tiers() {
        let bps = Breakpoints::create(
            Some("a".into()),
            None,
            Some("c".into()),
            None,
            None,
            Some("f".into()),
        );
        let keys: Vec<_> = bps.iter().map(|(bp, _)| bp.clone()).collect();
        assert_eq!(
            keys,
            vec![Breakpoint::Base, Breakpoint::Tier(2), Breakpoint::Tier(5)]
        );
    }

    #[test]
    fn default_table() {
        let table = BreakpointTable::default();
        assert_eq!(table.widths(), &DEFAULT_BREAKPOINTS);
        assert_eq!(table.len(), 5);
        assert_eq!(table.min_width(&Breakpoint::Base), None);
        assert_eq!(table.min_width(&Breakpoint::Tier(1)).as_deref(), Some("480px"));
        assert_eq!(table.min_width(&Breakpoint::Tier(5)).as_deref(), Some("1536px"));
        assert_eq!(table.min_width(&Breakpoint::Tier(6)), None);
        assert_eq!(table.min_width(&Breakpoint::Tier(0)), None);
    }

    #[test]
    fn width_in_px_units() {
        assert_eq!(width_in_px("480px"), Some(480.0));
        assert_eq!(width_in_px("20em"), Some(320.0));
        assert_eq!(width_in_px("1.5rem"), Some(24.0));
        assert_eq!(width_in_px(" 40em "), Some(640.0));
        assert_eq!(width_in_px("50vw"), None);
        assert_eq!(width_in_px("calc(100% - 2em)"), None);
    }

    #[test]
    fn custom_table_validation() {
        assert!(BreakpointTable::new(vec![480, 768]).is_ok());
        assert!(BreakpointTable::new(vec![]).is_err());
        assert!(BreakpointTable::new(vec![0, 480]).is_err());

        let err = BreakpointTable::new(vec![768, 480]).unwrap_err();
        assert!(err.to_string().contains("768 then 480"));
    }

    #[test]
    fn media_query_format() {
        assert_eq!(
            media_query("480px"),
            "@media screen and (min-width: 480px)"
        );
    }
}
