//! The serializer: compact JSON text from a [`Value`] tree.
//!
//! Output is the structural mirror of the parser: no padding, members in
//! map iteration order, numbers in the shortest decimal form that parses
//! back to the identical `f64`.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::value::Value;

/// Serializes a value tree to compact JSON text.
///
/// Total for every well-formed tree; `parse(&stringify(&v))` yields a
/// tree equal to `v`.
///
/// # Examples
///
/// ```
/// use jsontree::{Value, stringify};
///
/// let v = Value::Array(vec![Value::Null, Value::String("a\"b".into())]);
/// assert_eq!(stringify(&v), r#"[null,"a\"b"]"#);
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::with_capacity(128);
    write_value(value, &mut out).expect("writing to a String cannot fail");
    out
}

fn write_value<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => write_escaped_string(s, out),
        Value::Array(elements) => {
            out.write_str("[")?;
            let mut first = true;
            for element in elements {
                if !first {
                    out.write_str(",")?;
                }
                first = false;
                write_value(element, out)?;
            }
            out.write_str("]")
        }
        Value::Object(members) => {
            out.write_str("{")?;
            let mut first = true;
            for (key, value) in members {
                if !first {
                    out.write_str(",")?;
                }
                first = false;
                write_escaped_string(key, out)?;
                out.write_str(":")?;
                write_value(value, out)?;
            }
            out.write_str("}")
        }
    }
}

/// Writes `src` as a quoted JSON string literal.
///
/// `"` and `\` and the six named control characters use their two-character
/// escapes; any other character below U+0020 becomes `\u00XX`. Everything
/// else passes through unchanged, UTF-8 validity is the `String` invariant.
fn write_escaped_string<W: Write>(src: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for c in src.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{C}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04X}", c as u32)?,
            _ => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f)
    }
}
