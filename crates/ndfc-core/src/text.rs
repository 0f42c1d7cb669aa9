//! Text cleanup for values embedded in controller template JSON.
//!
//! The controller returns HTML entities, bracketed lists, stray quotes and
//! line-break markup inside annotation strings. Everything that reaches the
//! documentation passes through [`clean_text`] first.
//!
//! # Examples
//!
//! ```
//! use ndfc_core::text::{clean_text, strip_min_max};
//!
//! assert_eq!(clean_text("  \"Native,IPv6\" "), "Native,IPv6");
//! assert_eq!(clean_text("a<br />b"), "a b");
//! assert_eq!(strip_min_max("BGP hold time (Min:3, Max:3600)"), "BGP hold time");
//! ```

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static MIN_MAX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(Min:\s*\d+,\s*Max:\s*\d+\)").expect("valid regex"));

/// Entity and markup replacements, applied in order.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("<br />", " "),
    ("&#39;", ""),
    ("&#43;", "+"),
    ("&#61;", "="),
    ("amp;", ""),
    ("[", ""),
    ("]", ""),
    ("\"", ""),
    ("'", ""),
];

/// Removes markup, entities, brackets and quotes, and collapses whitespace.
#[must_use]
pub fn clean_text(input: &str) -> String {
    let mut text = input.trim().to_string();
    for (from, to) in REPLACEMENTS {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }
    WHITESPACE_REGEX
        .replace_all(&text, " ")
        .trim()
        .to_string()
}

/// Removes a `(Min: x, Max: y)` range note from a description.
#[must_use]
pub fn strip_min_max(input: &str) -> String {
    let stripped = MIN_MAX_REGEX.replace_all(input, "");
    WHITESPACE_REGEX
        .replace_all(stripped.trim(), " ")
        .to_string()
}

/// Interprets `true`/`yes`/`false`/`no` (any case) as a boolean.
///
/// # Examples
///
/// ```
/// use ndfc_core::text::parse_bool_like;
///
/// assert_eq!(parse_bool_like("Yes"), Some(true));
/// assert_eq!(parse_bool_like("FALSE"), Some(false));
/// assert_eq!(parse_bool_like("1"), None);
/// ```
#[must_use]
pub fn parse_bool_like(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// Parses an integer literal, tolerating surrounding whitespace.
#[must_use]
pub fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_entities() {
        assert_eq!(clean_text("a &#43; b &#61; c"), "a + b = c");
        assert_eq!(clean_text("don&#39;t"), "dont");
        assert_eq!(clean_text("R&amp;D"), "R&D");
    }

    #[test]
    fn test_clean_text_brackets_and_quotes() {
        assert_eq!(clean_text("[\"a\",'b']"), "a,b");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  one \n\t two   three "), "one two three");
        assert_eq!(clean_text("line<br />break"), "line break");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_strip_min_max_variants() {
        assert_eq!(strip_min_max("Timer (Min:240, Max:3600)"), "Timer");
        assert_eq!(strip_min_max("Timer (Min: 1, Max: 10) seconds"), "Timer seconds");
        assert_eq!(strip_min_max("No range here"), "No range here");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" 54321 "), Some(54321));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("2-4094"), None);
        assert_eq!(parse_integer(""), None);
    }
}
