//! Type errors.

use jiji_diagnostic::{Diagnostic, ErrorCode, InternalError};
use jiji_ir::{BinaryOp, Name, Span, StringInterner, Type, UnaryOp};

/// A type error in the program being compiled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeErrorKind {
    /// A prefix operator the operand's type does not support.
    UnaryTypeMismatch { op: UnaryOp, operand: Type },
    /// A binary operator the operand types do not support together.
    BinaryTypeMismatch {
        left: Type,
        op: BinaryOp,
        right: Type,
    },
    /// A `let` value that does not match its ascribed type.
    LetTypeMismatch { expected: Type, found: Type },
    /// An ascription naming a type that does not exist.
    UnknownType(Name),
    /// An `if` condition that is not `Bool`.
    IfCondNotBool { found: Type },
    /// An `if` branch whose type differs from the first branch, or an
    /// `if` without `else` whose branch is not `Unit`.
    IfTypeMismatch { expected: Type, found: Type },
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        TypeError { kind, span }
    }

    pub fn message(&self, interner: &StringInterner) -> String {
        match self.kind {
            TypeErrorKind::UnaryTypeMismatch { op, operand } => {
                format!(
                    "Operator \"{}\" cannot be applied to {operand}",
                    op.as_symbol()
                )
            }
            TypeErrorKind::BinaryTypeMismatch { left, op, right } => {
                format!(
                    "Operator \"{}\" cannot be applied to {left} and {right}",
                    op.as_symbol()
                )
            }
            TypeErrorKind::LetTypeMismatch { expected, found } => {
                format!("Expected type {expected} but found {found}")
            }
            TypeErrorKind::UnknownType(name) => {
                format!("Unknown type \"{}\"", interner.lookup(name))
            }
            TypeErrorKind::IfCondNotBool { found } => {
                format!("If condition must be Bool, found {found}")
            }
            TypeErrorKind::IfTypeMismatch { expected, found } => {
                format!("If branches must have the same type: expected {expected}, found {found}")
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            TypeErrorKind::UnknownType(_) => ErrorCode::E2002,
            TypeErrorKind::LetTypeMismatch { .. } => ErrorCode::E2003,
            TypeErrorKind::UnaryTypeMismatch { .. } | TypeErrorKind::BinaryTypeMismatch { .. } => {
                ErrorCode::E2004
            }
            TypeErrorKind::IfCondNotBool { .. } => ErrorCode::E2005,
            TypeErrorKind::IfTypeMismatch { .. } => ErrorCode::E2006,
        }
    }

    #[cold]
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.message(interner))
            .with_span(self.span)
    }
}

/// Why type checking stopped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckError {
    /// The program is ill-typed.
    Type(TypeError),
    /// An earlier pass left the side tables incomplete.
    Internal(InternalError),
}

impl From<TypeError> for CheckError {
    fn from(err: TypeError) -> Self {
        CheckError::Type(err)
    }
}

impl From<InternalError> for CheckError {
    fn from(err: InternalError) -> Self {
        CheckError::Internal(err)
    }
}
