//! Expression nodes.

use std::fmt;

use crate::{BinaryOp, BranchRange, ExprId, Name, Span, Spanned, StmtRange, UnaryOp};

/// Expression node.
///
/// Children are referenced by `ExprId`, never boxed.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: 42
    Int(i64),

    /// Float literal: 3.14 (stored as bits)
    Float(u64),

    /// Boolean literal: true, false
    Bool(bool),

    /// String literal, contents already cooked
    String(Name),

    /// Reference to a `let` binding
    Ident(Name),

    /// Unary operation: !x, -x, +x
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Parenthesized expression: (expr)
    Group(ExprId),

    /// Block expression: { stmts; result }
    ///
    /// `result` is the trailing expression without a semicolon, if any.
    /// A block without one evaluates to `Unit`.
    Block {
        stmts: StmtRange,
        result: Option<ExprId>,
    },

    /// Conditional: if c1 { } else if c2 { } else { }
    ///
    /// Every branch block and `else_block` is an `ExprKind::Block`.
    If {
        branches: BranchRange,
        else_block: Option<ExprId>,
    },
}

impl ExprKind {
    /// Whether this expression ends with a block and therefore may stand as
    /// a statement without a trailing semicolon.
    pub fn is_block_like(&self) -> bool {
        matches!(self, ExprKind::Block { .. } | ExprKind::If { .. })
    }
}

/// One `if` / `else if` arm: a condition and the block it guards.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfBranch {
    pub cond: ExprId,
    pub block: ExprId,
}
