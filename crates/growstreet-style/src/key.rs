//! Style key normalization.
//!
//! Author-facing keys arrive in camelCase, snake_case or kebab-case and may
//! be shorthands for several CSS properties. [`normalize_key`] maps them to
//! the canonical camelCase property names the CSS-in-JS layer understands.
//! Selector-like keys (`& > div`, `:hover`) and custom properties (`--x`)
//! are left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Shorthand keys and the CSS properties they expand to.
pub const SHORTHAND_PROPS: &[(&str, &[&str])] = &[
    ("paddingX", &["paddingInlineStart", "paddingInlineEnd"]),
    ("paddingY", &["paddingTop", "paddingBottom"]),
    ("marginX", &["marginInlineStart", "marginInlineEnd"]),
    ("marginY", &["marginTop", "marginBottom"]),
    ("bg", &["background"]),
    ("bgColor", &["backgroundColor"]),
    // Radix components read their font from this variable, not from body.
    ("fontFamily", &["fontFamily", "--default-font-family"]),
];

/// Plain identifier keys: the only ones that get case conversion.
static IDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

static CAPITALIZED_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());

static LOWER_UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Look up the expansion of a camelCase shorthand key.
pub fn shorthand(key: &str) -> Option<&'static [&'static str]> {
    SHORTHAND_PROPS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, props)| *props)
}

/// Convert an identifier key to camelCase.
///
/// `-` and `_` separators are dropped and the next letter upper-cased.
/// Leading underscores survive (`_first_child` becomes `_firstChild`) so
/// pseudo-selector keys keep their marker, and a leading hyphen turns into
/// a capitalized vendor prefix (`-webkit-box-shadow` becomes
/// `WebkitBoxShadow`). Custom properties and anything that is not a plain
/// identifier are returned unchanged.
pub fn to_camel_case(key: &str) -> String {
    if key.starts_with("--") || !IDENT_RE.is_match(key) {
        return key.to_string();
    }

    let body = key.trim_start_matches('_');
    let prefix = &key[..key.len() - body.len()];

    let mut out = String::with_capacity(key.len());
    out.push_str(prefix);

    let mut words = body.split(['-', '_']);
    if let Some(first) = words.next() {
        out.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    if out.is_empty() {
        return key.to_string();
    }
    out
}

/// Convert a camelCase or snake_case name to kebab-case (`firstChild` -> `first-child`).
pub fn to_kebab_case(text: &str) -> String {
    let spaced = CAPITALIZED_WORD_RE.replace_all(text, "${1}_${2}");
    let spaced = LOWER_UPPER_RE.replace_all(&spaced, "${1}_${2}");
    spaced.to_lowercase().replace('_', "-")
}

/// Normalize a style key into the canonical CSS property names it stands for.
///
/// Always returns at least one name. Unknown keys pass through in their
/// camelCase form.
pub fn normalize_key(key: &str) -> Vec<String> {
    let key = to_camel_case(key);
    match shorthand(&key) {
        Some(props) => props.iter().map(|p| (*p).to_string()).collect(),
        None => vec![key],
    }
}

/// Normalize every key in `keys`, dropping repeats while keeping first-seen order.
pub fn normalize_all<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for key in keys {
        for name in normalize_key(key.as_ref()) {
            if !out.contains(&name) {
                out.push(name);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn camel_case_passes_through() {
        assert_eq!(to_camel_case("backgroundColor"), "backgroundColor");
        assert_eq!(to_camel_case("color"), "color");
    }

    #[test]
    fn snake_and_kebab_become_camel() {
        assert_eq!(to_camel_case("background_color"), "backgroundColor");
        assert_eq!(to_camel_case("font-size"), "fontSize");
        assert_eq!(to_camel_case("padding_x"), "paddingX");
        assert_eq!(to_camel_case("border-top_left-radius"), "borderTopLeftRadius");
    }

    #[test]
    fn leading_underscores_are_kept() {
        assert_eq!(to_camel_case("_hover"), "_hover");
        assert_eq!(to_camel_case("_first_child"), "_firstChild");
        assert_eq!(to_camel_case("_last-child"), "_lastChild");
    }

    #[test]
    fn vendor_prefix_is_capitalized() {
        assert_eq!(to_camel_case("-webkit-box-shadow"), "WebkitBoxShadow");
    }

    #[test]
    fn selectors_and_custom_properties_untouched() {
        assert_eq!(to_camel_case("--default-font-family"), "--default-font-family");
        assert_eq!(to_camel_case("& > div"), "& > div");
        assert_eq!(to_camel_case(":first-child"), ":first-child");
        assert_eq!(
            to_camel_case("& :where(.rx-Stack)"),
            "& :where(.rx-Stack)"
        );
    }

    #[test]
    fn degenerate_keys_do_not_vanish() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("-"), "-");
        assert_eq!(to_camel_case("__"), "__");
    }

    #[test]
    fn kebab_case_conversion() {
        assert_eq!(to_kebab_case("firstChild"), "first-child");
        assert_eq!(to_kebab_case("hover"), "hover");
        assert_eq!(to_kebab_case(":focusVisible"), ":focus-visible");
        assert_eq!(to_kebab_case("nth_child"), "nth-child");
    }

    #[test]
    fn shorthands_expand() {
        assert_eq!(
            normalize_key("paddingX"),
            vec!["paddingInlineStart", "paddingInlineEnd"]
        );
        assert_eq!(normalize_key("padding_y"), vec!["paddingTop", "paddingBottom"]);
        assert_eq!(
            normalize_key("margin-x"),
            vec!["marginInlineStart", "marginInlineEnd"]
        );
        assert_eq!(normalize_key("marginY"), vec!["marginTop", "marginBottom"]);
        assert_eq!(normalize_key("bg"), vec!["background"]);
        assert_eq!(normalize_key("bg_color"), vec!["backgroundColor"]);
        assert_eq!(
            normalize_key("font_family"),
            vec!["fontFamily", "--default-font-family"]
        );
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(normalize_key("text_align"), vec!["textAlign"]);
        assert_eq!(normalize_key("& > div"), vec!["& > div"]);
    }

    #[test]
    fn normalize_all_dedupes() {
        let once = normalize_key("fontFamily");
        assert_eq!(normalize_all(&once), once);
    }

    fn any_key() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z]{1,8}([_-][a-z]{1,8}){0,3}",
            "_{1,2}[a-z]{1,6}([_-][a-z]{1,6}){0,2}",
            "--[a-z]{1,6}(-[a-z]{1,6}){0,2}",
            Just("paddingX".to_string()),
            Just("padding_y".to_string()),
            Just("font-family".to_string()),
            Just("bg".to_string()),
            Just("& > div".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(key in any_key()) {
            let once = normalize_key(&key);
            prop_assert!(!once.is_empty());
            prop_assert_eq!(normalize_all(&once), once);
        }

        #[test]
        fn camel_case_is_idempotent(key in any_key()) {
            let once = to_camel_case(&key);
            prop_assert_eq!(to_camel_case(&once), once);
        }
    }
}
