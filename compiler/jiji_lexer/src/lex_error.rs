//! Lexer error types.
//!
//! Every lexer error is fatal: the lexer reports the first problem it
//! finds and compilation stops.

use jiji_diagnostic::{Diagnostic, ErrorCode};
use jiji_ir::quote::quote_char;
use jiji_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Character Errors ===
    /// A character that cannot start any token.
    UnknownChar(char),

    // === Numeric Errors ===
    /// `.` in a number not followed by a digit (`1.`, `1.e5`).
    MissingFrac,
    /// `e`/`E` in a number not followed by a digit (`1e`, `1e+`).
    MissingExp,
    /// Integer literal does not fit in an `i64`.
    IntOverflow,

    // === String Errors ===
    /// End of input before the closing quote.
    UnclosedString,
    /// `\` followed by a character with no escape meaning.
    UnknownEscape(char),
    /// `\u` not followed by `{`.
    UniEscMissingOpen,
    /// `\u{` never closed by `}`.
    UniEscMissingClose,
    /// `\u{...}` containing a non-hex character, or nothing at all.
    UniEscNotHex,
    /// `\u{...}` naming a surrogate or a value above U+10FFFF.
    UniEscInvalidCodePoint(String),

    // === Source Errors ===
    /// Source longer than `u32::MAX` bytes; spans cannot address it.
    SourceTooLarge,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// The message shown after the location in a rendered diagnostic.
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnknownChar(c) => format!("Unknown character {}", quote_char(*c)),
            LexErrorKind::MissingFrac => "Expected digits after the decimal point".to_string(),
            LexErrorKind::MissingExp => "Expected digits in the exponent".to_string(),
            LexErrorKind::IntOverflow => "Integer literal is too large".to_string(),
            LexErrorKind::UnclosedString => "Unclosed string".to_string(),
            LexErrorKind::UnknownEscape(c) => {
                format!("Unknown escape sequence \"\\{}\"", c.escape_debug())
            }
            LexErrorKind::UniEscMissingOpen => r#"Expected "{" after "\u""#.to_string(),
            LexErrorKind::UniEscMissingClose => {
                r#"Expected "}" to close the unicode escape"#.to_string()
            }
            LexErrorKind::UniEscNotHex => {
                "Unicode escape must contain only hexadecimal digits".to_string()
            }
            LexErrorKind::UniEscInvalidCodePoint(text) => {
                format!("Invalid unicode code point \"{}\"", text.escape_debug())
            }
            LexErrorKind::SourceTooLarge => "Source file is too large".to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnknownChar(_) | LexErrorKind::SourceTooLarge => ErrorCode::E0001,
            LexErrorKind::MissingFrac => ErrorCode::E0002,
            LexErrorKind::MissingExp => ErrorCode::E0003,
            LexErrorKind::IntOverflow => ErrorCode::E0004,
            LexErrorKind::UnclosedString => ErrorCode::E0005,
            LexErrorKind::UnknownEscape(_) => ErrorCode::E0006,
            LexErrorKind::UniEscMissingOpen
            | LexErrorKind::UniEscMissingClose
            | LexErrorKind::UniEscNotHex => ErrorCode::E0007,
            LexErrorKind::UniEscInvalidCodePoint(_) => ErrorCode::E0008,
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.message())
            .with_span(self.span)
    }
}
