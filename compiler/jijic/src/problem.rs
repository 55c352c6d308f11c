//! Structured problem types.
//!
//! A [`Problem`] is a user-facing error from one compilation phase. It
//! keeps the stage's structured error so callers can match on it, and
//! renders through the stage's own diagnostic conversion.

use jiji_diagnostic::Diagnostic;
use jiji_ir::{Span, StringInterner};
use jiji_lexer::LexError;
use jiji_parse::ParseError;
use jiji_resolve::ResolveError;
use jiji_types::TypeError;

/// The first error found in a program, by phase.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Problem {
    /// Tokenization errors.
    Lex(LexError),
    /// Syntax errors.
    Parse(ParseError),
    /// References to names with no binding in scope.
    Resolve(ResolveError),
    /// Type errors.
    Type(TypeError),
}

/// Generate `From<T> for Problem` implementation.
macro_rules! impl_from_problem {
    ($source:ty => $variant:path) => {
        impl From<$source> for Problem {
            fn from(err: $source) -> Self {
                $variant(err)
            }
        }
    };
}

/// Generate type predicates for the Problem enum.
macro_rules! impl_problem_predicates {
    ($enum_name:ident { $( $variant:ident => $method:ident ),* $(,)? }) => {
        impl $enum_name {
            $(
                #[doc = concat!("Check if this is a ", stringify!($variant), " problem.")]
                pub fn $method(&self) -> bool {
                    matches!(self, $enum_name::$variant(_))
                }
            )*
        }
    };
}

impl_from_problem!(LexError => Problem::Lex);
impl_from_problem!(ResolveError => Problem::Resolve);
impl_from_problem!(TypeError => Problem::Type);

impl From<ParseError> for Problem {
    /// Lexical errors surface through the parser; report them as such.
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(err) => Problem::Lex(err),
            err @ ParseError::Syntax { .. } => Problem::Parse(err),
        }
    }
}

impl_problem_predicates!(Problem {
    Lex => is_lex,
    Parse => is_parse,
    Resolve => is_resolve,
    Type => is_type,
});

impl Problem {
    /// Get the primary span of this problem.
    pub fn span(&self) -> Span {
        match self {
            Problem::Lex(err) => err.span,
            Problem::Parse(err) => err.span(),
            Problem::Resolve(err) => err.span,
            Problem::Type(err) => err.span,
        }
    }

    /// Convert this problem into a diagnostic.
    ///
    /// The interner is required to look up interned `Name` values.
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        match self {
            Problem::Lex(err) => err.to_diagnostic(),
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Resolve(err) => err.to_diagnostic(interner),
            Problem::Type(err) => err.to_diagnostic(interner),
        }
    }
}
