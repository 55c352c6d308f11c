//! Escape cooking for double-quoted strings.
//!
//! Valid escapes: `\b` `\f` `\r` `\n` `\t` `\v` `\'` `\"` `\\` and
//! `\u{H+}` with one or more hex digits naming a Unicode scalar value.
//!
//! Escape errors span from the backslash to wherever scanning stopped.
//! A `\u{` escape scans to the first `}`, so an unclosed one runs to the
//! end of the input.

use jiji_ir::Span;

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};

/// Resolve a single-character escape.
#[inline]
fn resolve_simple_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'r' => Some('\r'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'v' => Some('\u{b}'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Cook one escape sequence into `out`.
///
/// The cursor must sit on the backslash. On success it is left just past
/// the escape. `string_start` is the offset of the opening quote, used when
/// the input ends right after the backslash.
pub(crate) fn cook_escape(
    cursor: &mut Cursor<'_>,
    string_start: u32,
    out: &mut String,
) -> Result<(), LexError> {
    let start = cursor.pos();
    cursor.advance(); // backslash

    let Some(esc) = cursor.current_char() else {
        cursor.advance_to_end();
        return Err(LexError::new(
            LexErrorKind::UnclosedString,
            Span::new(string_start, cursor.pos()),
        ));
    };
    cursor.advance_char();

    if let Some(resolved) = resolve_simple_escape(esc) {
        out.push(resolved);
        return Ok(());
    }

    if esc == 'u' {
        out.push(cook_unicode_escape(cursor, start)?);
        return Ok(());
    }

    Err(LexError::new(
        LexErrorKind::UnknownEscape(esc),
        Span::new(start, cursor.pos()),
    ))
}

/// Cook the `{H+}` part of a `\u` escape. The cursor sits just past the `u`.
fn cook_unicode_escape(cursor: &mut Cursor<'_>, start: u32) -> Result<char, LexError> {
    if !cursor.eat(b'{') {
        return Err(escape_error(LexErrorKind::UniEscMissingOpen, start, cursor));
    }

    let digits_start = cursor.pos();
    loop {
        if cursor.is_eof() {
            return Err(escape_error(LexErrorKind::UniEscMissingClose, start, cursor));
        }
        if cursor.current() == b'}' {
            break;
        }
        cursor.advance_char();
    }
    let digits = cursor.slice_from(digits_start);
    cursor.advance(); // `}`

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(escape_error(LexErrorKind::UniEscNotHex, start, cursor));
    }

    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            escape_error(
                LexErrorKind::UniEscInvalidCodePoint(digits.to_string()),
                start,
                cursor,
            )
        })
}

fn escape_error(kind: LexErrorKind, start: u32, cursor: &Cursor<'_>) -> LexError {
    LexError::new(kind, Span::new(start, cursor.pos()))
}
