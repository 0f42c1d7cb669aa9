//! YAML 1.1 safe quoting.
//!
//! `serde_yaml` quotes a string only when a YAML 1.2 loader would read it as
//! something else. Ansible loads module documentation with `PyYAML`, a YAML 1.1
//! loader, which also turns `yes`, `off`, `1_000`, `1:30` or `2024-01-31`
//! into booleans, numbers and dates. [`quote_yaml11_scalars`] single-quotes
//! those plain scalars in rendered output.
//!
//! A scalar is only quoted when `serde_yaml` itself reads it back as a
//! string, so genuine booleans and integers keep their plain form.

use regex::Regex;
use serde_yaml::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Plain scalars with a non-string meaning under the YAML 1.1 resolvers.
static YAML11_IMPLICIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        // bool
        r"^(?:(?i:y|n|yes|no|on|off|true|false)",
        // int, including binary, octal, hex and sexagesimal forms
        r"|[-+]?0b[0-1_]+",
        r"|[-+]?0[0-7_]+",
        r"|[-+]?(?:0|[1-9][0-9_]*)",
        r"|[-+]?0x[0-9a-fA-F_]+",
        r"|[-+]?[1-9][0-9_]*(?::[0-5]?[0-9])+",
        // float
        r"|[-+]?[0-9][0-9_]*\.[0-9_]*(?:[eE][-+][0-9]+)?",
        r"|\.[0-9_]+(?:[eE][-+][0-9]+)?",
        r"|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*",
        r"|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN)",
        // null, merge and value keys
        r"|~|null|Null|NULL|<<|=",
        // timestamp
        r"|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}",
        r"(?:(?:[Tt]|[ \t]+)[0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]*)?",
        r"(?:[ \t]*(?:Z|[-+][0-9]{1,2}(?::[0-9]{2})?))?)?",
        r")$"
    ))
    .expect("valid regex")
});

/// Returns true if `scalar`, written plain, is a string to `serde_yaml` but
/// not to a YAML 1.1 loader.
fn needs_yaml11_quotes(scalar: &str) -> bool {
    YAML11_IMPLICIT_REGEX.is_match(scalar)
        && matches!(serde_yaml::from_str::<Value>(scalar), Ok(Value::String(_)))
}

/// Single-quotes every plain scalar of `yaml` that [`needs_yaml11_quotes`].
///
/// `yaml` must be block-style output of `serde_yaml`: one scalar per line,
/// with multi-line strings as literal blocks, which are left untouched.
pub fn quote_yaml11_scalars(yaml: &str) -> String {
    let mut output = String::with_capacity(yaml.len());
    let mut literal_block: Option<usize> = None;

    for line in yaml.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if let Some(column) = literal_block {
            if indent > column || line.trim().is_empty() {
                output.push_str(line);
                output.push('\n');
                continue;
            }
            literal_block = None;
        }

        let (prefix, body) = split_prefix(line);
        let body = requote_body(body);
        if opens_literal_block(&body) {
            literal_block = Some(prefix.len());
        }
        output.push_str(prefix);
        output.push_str(&body);
        output.push('\n');
    }

    output
}

/// Returns true for `|`, `key: |-` and similar literal block headers.
fn opens_literal_block(body: &str) -> bool {
    let header = body.trim_end_matches(['-', '+']).trim_end_matches(|c: char| c.is_ascii_digit());
    header == "|" || header.ends_with(" |")
}

/// Splits indentation and sequence markers from the node on `line`.
fn split_prefix(line: &str) -> (&str, &str) {
    let mut rest = line.trim_start_matches(' ');
    while let Some(next) = rest.strip_prefix("- ") {
        rest = next.trim_start_matches(' ');
    }
    line.split_at(line.len() - rest.len())
}

fn requote_body(body: &str) -> Cow<'_, str> {
    match split_key(body) {
        Some((key, "")) => match requote_scalar(key) {
            Cow::Borrowed(_) => Cow::Borrowed(body),
            Cow::Owned(key) => Cow::Owned(format!("{key}:")),
        },
        Some((key, value)) => match (requote_scalar(key), requote_scalar(value)) {
            (Cow::Borrowed(_), Cow::Borrowed(_)) => Cow::Borrowed(body),
            (key, value) => Cow::Owned(format!("{key}: {value}")),
        },
        None => requote_scalar(body),
    }
}

/// Splits `key: value` or `key:` into key and (possibly empty) value.
fn split_key(body: &str) -> Option<(&str, &str)> {
    let key_end = match body.chars().next() {
        Some(quote @ ('\'' | '"')) => closing_quote(body, quote)?,
        _ => body
            .find(": ")
            .or_else(|| body.strip_suffix(':').map(str::len))?,
    };
    let (key, rest) = body.split_at(key_end);
    let value = rest.strip_prefix(": ").or_else(|| (rest == ":").then_some(""))?;
    Some((key, value))
}

/// Byte offset just past the quote closing the scalar opened at `body[0]`.
fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut chars = body.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        if quote == '"' && c == '\\' {
            chars.next();
        } else if c == quote {
            if quote == '\'' && chars.peek().is_some_and(|&(_, next)| next == '\'') {
                chars.next();
            } else {
                return Some(i + c.len_utf8());
            }
        }
    }
    None
}

fn requote_scalar(scalar: &str) -> Cow<'_, str> {
    if needs_yaml11_quotes(scalar) {
        Cow::Owned(format!("'{scalar}'"))
    } else {
        Cow::Borrowed(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml11_booleans_need_quotes() {
        for scalar in ["yes", "No", "ON", "off", "y", "N"] {
            assert!(needs_yaml11_quotes(scalar), "{scalar}");
        }
    }

    #[test]
    fn test_yaml11_numbers_need_quotes() {
        for scalar in ["1_000", "1:30", "0b1_01", "0x1_F", "2024-01-31", "1_0.5", "=", "<<"] {
            assert!(needs_yaml11_quotes(scalar), "{scalar}");
        }
    }

    #[test]
    fn test_native_scalars_stay_plain() {
        for scalar in ["true", "false", "42", "-7", "1.5", "null", "~"] {
            assert!(!needs_yaml11_quotes(scalar), "{scalar}");
        }
        for scalar in ["UNDERLAY", "Default_VRF_Universal", "10.1.1.1", "yes please", "onboard"] {
            assert!(!needs_yaml11_quotes(scalar), "{scalar}");
        }
    }

    #[test]
    fn test_quotes_mapping_values_and_sequence_items() {
        let yaml = "A:\n  choices:\n  - on\n  - off\n  default: on\n  required: false\n  type: str\n";
        assert_eq!(
            quote_yaml11_scalars(yaml),
            "A:\n  choices:\n  - 'on'\n  - 'off'\n  default: 'on'\n  required: false\n  type: str\n"
        );
    }

    #[test]
    fn test_quotes_keys() {
        assert_eq!(quote_yaml11_scalars("yes:\n  type: str\n"), "'yes':\n  type: str\n");
        assert_eq!(quote_yaml11_scalars("- no: 1:30\n"), "- 'no': '1:30'\n");
    }

    #[test]
    fn test_leaves_quoted_and_native_scalars() {
        let yaml = "a: '0'\nb: true\nc: 54321\nd: 'it''s: on'\n\"e\": \"x\"\n";
        assert_eq!(quote_yaml11_scalars(yaml), yaml);
    }

    #[test]
    fn test_leaves_literal_blocks() {
        let yaml = "content: |-\n  on\n  - yes\nnext: off\nlines:\n- |2-\n   on\n- on\n";
        assert_eq!(
            quote_yaml11_scalars(yaml),
            "content: |-\n  on\n  - yes\nnext: 'off'\nlines:\n- |2-\n   on\n- 'on'\n"
        );
    }
}
