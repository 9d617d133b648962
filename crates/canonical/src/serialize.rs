//! The canonical pretty-printer.
//!
//! One fixed convention: two-space indent, `"key": value`, one nesting
//! level's content per line group, `[]`/`{}` for empty containers, no
//! trailing newline. Structurally identical values serialize byte-for-byte
//! identically, which is what lets the line differencer see zero delta on
//! truly-equal content.

use crate::value::JsonValue;

const INDENT: &str = "  ";

/// Renders a value to its canonical textual form.
pub fn to_canonical_text(value: &JsonValue) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

fn write_value(value: &JsonValue, depth: usize, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Number(n) => out.push_str(&n.to_string()),
        JsonValue::String(s) => write_string(s, out),
        JsonValue::Array(items) => write_array(items, depth, out),
        JsonValue::Object(entries) => write_object(entries, depth, out),
    }
}

fn write_array(items: &[JsonValue], depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        push_indent(depth + 1, out);
        write_value(item, depth + 1, out);
    }
    out.push('\n');
    push_indent(depth, out);
    out.push(']');
}

fn write_object(entries: &[(String, JsonValue)], depth: usize, out: &mut String) {
    if entries.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        push_indent(depth + 1, out);
        write_string(key, out);
        out.push_str(": ");
        write_value(value, depth + 1, out);
    }
    out.push('\n');
    push_indent(depth, out);
    out.push('}');
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn canonical(text: &str) -> String {
        to_canonical_text(&parse(text).expect("valid document"))
    }

    #[test]
    fn scalars() {
        assert_eq!(canonical("null"), "null");
        assert_eq!(canonical("true"), "true");
        assert_eq!(canonical("false"), "false");
        assert_eq!(canonical("42"), "42");
        assert_eq!(canonical("-0.5"), "-0.5");
        assert_eq!(canonical("\"hi\""), "\"hi\"");
    }

    #[test]
    fn empty_containers_stay_on_one_line() {
        assert_eq!(canonical("[]"), "[]");
        assert_eq!(canonical("{}"), "{}");
        assert_eq!(canonical("{\"a\": []}"), "{\n  \"a\": []\n}");
    }

    #[test]
    fn nested_indentation() {
        let out = canonical(r#"{"a": {"b": [1, {"c": null}]}}"#);
        let expected = "{\n  \"a\": {\n    \"b\": [\n      1,\n      {\n        \"c\": null\n      }\n    ]\n  }\n}";
        assert_eq!(out, expected);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(canonical(r#""a\"b""#), r#""a\"b""#);
        assert_eq!(canonical(r#""tab\there""#), "\"tab\\there\"");
        assert_eq!(canonical("\"\\u0001\""), "\"\\u0001\"");
        // Non-ASCII passes through unescaped.
        assert_eq!(canonical("\"caf\u{e9}\""), "\"caf\u{e9}\"");
    }

    #[test]
    fn float_spellings_collapse_to_one_rendering() {
        assert_eq!(canonical("1.10"), canonical("1.1"));
        // Integer and float spellings of the same quantity stay distinct.
        assert_ne!(canonical("1"), canonical("1.0"));
    }
}
