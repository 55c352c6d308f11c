//! Parse error types.

use jiji_diagnostic::{Diagnostic, ErrorCode};
use jiji_ir::Span;
use jiji_lexer::LexError;

/// Why parsing stopped.
///
/// The parser pulls tokens from the lexer as it goes, so lexical errors
/// reach the caller through here too.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseError {
    /// The lexer failed while the parser was reading ahead.
    Lex(LexError),
    /// The tokens do not form a valid program.
    Syntax { kind: ParseErrorKind, span: Span },
}

/// What kind of syntax error occurred.
///
/// Each variant names what the parser expected at the offending token.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// `;` missing after a statement.
    ExpectSemi,
    /// No expression can start with this token.
    ExpectExpr,
    /// `(` without a matching `)`.
    ExpectParenClose,
    /// `{` without a matching `}`.
    ExpectBraceClose,
    /// `let` without a name, or `:` without a type name.
    ExpectName,
    /// `let name` not followed by `=`.
    ExpectEqual,
    /// `if`, `else if` or `else` not followed by `{`.
    ExpectBlock,
    /// `a == b == c` without parentheses.
    EqChain,
    /// `a < b < c` without parentheses.
    CmpChain,
}

impl ParseError {
    pub fn syntax(kind: ParseErrorKind, span: Span) -> Self {
        ParseError::Syntax { kind, span }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::Syntax { span, .. } => *span,
        }
    }

    /// The syntax error kind, or `None` for a lexical error.
    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            ParseError::Lex(_) => None,
            ParseError::Syntax { kind, .. } => Some(*kind),
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::Syntax { kind, span } => Diagnostic::error(kind.code())
                .with_message(kind.message())
                .with_span(*span),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl ParseErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ParseErrorKind::ExpectSemi => r#"Expected ";""#,
            ParseErrorKind::ExpectExpr => "Expected an expression",
            ParseErrorKind::ExpectParenClose => r#"Expected ")""#,
            ParseErrorKind::ExpectBraceClose => r#"Expected "}""#,
            ParseErrorKind::ExpectName => "Expected a name",
            ParseErrorKind::ExpectEqual => r#"Expected "=""#,
            ParseErrorKind::ExpectBlock => "Expected a block",
            ParseErrorKind::EqChain => "Equality operators cannot be chained; use parentheses",
            ParseErrorKind::CmpChain => "Comparison operators cannot be chained; use parentheses",
        }
    }

    pub fn code(self) -> ErrorCode {
        match self {
            ParseErrorKind::ExpectSemi => ErrorCode::E1001,
            ParseErrorKind::ExpectExpr => ErrorCode::E1002,
            ParseErrorKind::ExpectParenClose | ParseErrorKind::ExpectBraceClose => {
                ErrorCode::E1003
            }
            ParseErrorKind::ExpectName => ErrorCode::E1004,
            ParseErrorKind::ExpectEqual => ErrorCode::E1005,
            ParseErrorKind::ExpectBlock => ErrorCode::E1006,
            ParseErrorKind::EqChain | ParseErrorKind::CmpChain => ErrorCode::E1007,
        }
    }
}
