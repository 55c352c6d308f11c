//! JSON-style string quoting.
//!
//! Shared by diagnostic messages (`Unknown character "\f"`) and by the
//! JavaScript emitter, which needs string literals that survive a round
//! trip through a JS parser.

use std::fmt::Write;

/// Quote `s` with double quotes, escaping it the way `JSON.stringify` does.
///
/// U+2028 and U+2029 are also escaped so the result is a valid JavaScript
/// literal on every engine.
pub fn quote_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c if c < ' ' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Quote a single character, see [`quote_json`].
pub fn quote_char(c: char) -> String {
    let mut buf = [0u8; 4];
    quote_json(c.encode_utf8(&mut buf))
}
