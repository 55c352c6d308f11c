use std::fmt;

use jiji_ir::{SourceFile, Span};

use crate::ErrorCode;

/// A user-facing compiler error.
///
/// Compilation stops at the first error, so a diagnostic always stands
/// alone: one code, one message, one location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Where the error occurred.
    pub span: Span,
}

impl Diagnostic {
    /// Create a new error diagnostic with an empty message.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: Span::DUMMY,
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the error location.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Render as `path:line:column  message`.
    pub fn render(&self, file: &SourceFile) -> String {
        format!("{}  {}", file.location(self.span), self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {} at {}", self.code, self.message, self.span)
    }
}
