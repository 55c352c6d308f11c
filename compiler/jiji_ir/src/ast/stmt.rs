//! Statement nodes.

use std::fmt;

use crate::{ExprId, Name, Span, Spanned};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let name: Type = value;`
    Let {
        name: Name,
        ty: Option<TypeAscription>,
        value: ExprId,
    },

    /// An expression evaluated for its effects (or printed at top level).
    Expr(ExprId),
}

/// The `: Type` part of a `let`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeAscription {
    pub name: Name,
    pub span: Span,
}
