//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`) and binary operator precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Literals, names, groups and `if`
//!
//! Blocks and `if` may only start an expression. As the operand of an
//! operator they must be parenthesized.

mod operators;
mod primary;

use jiji_ir::{BinaryOp, Expr, ExprId, ExprKind, TokenKind};
use jiji_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        match self.current_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            _ => self.parse_relational(),
        }
    }

    /// Parse `==`, `!=`, `<`, `<=`, `>` and `>=`.
    ///
    /// Equality and comparison share one non-associative tier. The rule is
    /// right-recursive, so an unparenthesized chain shows up as a node of
    /// the same category in the right operand and is reported at that
    /// operand's span. Mixing categories is accepted: `a < b == c` is
    /// `a < (b == c)`.
    pub(crate) fn parse_relational(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_concat()?;
        let Some(op) = self.match_relational_op() else {
            return Ok(left);
        };
        self.advance()?;
        let right = ensure_sufficient_stack(|| self.parse_relational())?;

        let chain = if op.is_equality() {
            self.is_binary_where(right, BinaryOp::is_equality)
                .then_some(ParseErrorKind::EqChain)
        } else {
            self.is_binary_where(right, BinaryOp::is_comparison)
                .then_some(ParseErrorKind::CmpChain)
        };
        if let Some(kind) = chain {
            return Err(ParseError::syntax(kind, self.expr_span(right)));
        }
        Ok(self.alloc_binary(op, left, right))
    }

    /// Parse `~` (string concatenation).
    fn parse_concat(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_concat_op() {
            self.advance()?;
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/` and `%`.
    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.advance()?;
            let right = self.parse_unary()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `!`, `-` and `+`.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_primary();
        };
        let start = self.advance()?.span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.expr_span(operand));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)))
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.expr_span(left).merge(self.expr_span(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    fn is_binary_where(&self, id: ExprId, pred: impl Fn(BinaryOp) -> bool) -> bool {
        matches!(self.arena.get_expr(id).kind, ExprKind::Binary { op, .. } if pred(op))
    }
}
