//! Resolution errors.

use jiji_diagnostic::{Diagnostic, ErrorCode};
use jiji_ir::{Name, Span, StringInterner};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ResolveErrorKind {
    /// A name with no `let` in scope.
    UnknownBinding(Name),
}

impl ResolveError {
    pub fn new(kind: ResolveErrorKind, span: Span) -> Self {
        ResolveError { kind, span }
    }

    pub fn message(&self, interner: &StringInterner) -> String {
        match self.kind {
            ResolveErrorKind::UnknownBinding(name) => {
                format!("Unknown binding \"{}\"", interner.lookup(name))
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ResolveErrorKind::UnknownBinding(_) => ErrorCode::E2001,
        }
    }

    #[cold]
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.message(interner))
            .with_span(self.span)
    }
}
