//! Flat AST node definitions.
//!
//! Nodes are stored in an [`ExprArena`](crate::ExprArena) and reference each
//! other by ID.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, IfBranch};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind, TypeAscription};

use crate::{Span, Spanned, StmtRange};

/// A parsed source file: an ordered list of top-level statements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Module {
    pub stmts: StmtRange,
    pub span: Span,
}

impl Spanned for Module {
    fn span(&self) -> Span {
        self.span
    }
}

