//! Grammar productions.
//!
//! - `mod.rs`: module, statements and blocks
//! - `expr/`: expressions, from `if` down to primaries

mod expr;

use jiji_ir::{Expr, ExprId, ExprKind, Module, Stmt, StmtId, StmtKind, TokenKind, TypeAscription};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

/// Where a statement appears, which decides whether its `;` may be omitted.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum StmtPosition {
    TopLevel,
    InBlock,
}

impl Parser<'_> {
    /// `module = stmt* EOF`
    pub(crate) fn parse_module(&mut self) -> Result<Module, ParseError> {
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            stmts.push(self.parse_stmt(StmtPosition::TopLevel)?);
        }

        let end = self.current_span();
        let span = match stmts.first() {
            Some(&first) => self.arena.get_stmt(first).span.merge(end),
            None => end,
        };
        let stmts = self.arena.alloc_stmt_list(stmts);
        Ok(Module { stmts, span })
    }

    fn parse_stmt(&mut self, position: StmtPosition) -> Result<StmtId, ParseError> {
        if self.check(TokenKind::Let) {
            return self.parse_let(position);
        }
        let expr = self.parse_expr()?;
        self.finish_expr_stmt(expr)
    }

    /// Wrap an already-parsed expression as a statement, consuming its `;`.
    ///
    /// Block-like expressions take the `;` only if one is there.
    fn finish_expr_stmt(&mut self, expr: ExprId) -> Result<StmtId, ParseError> {
        let expr_span = self.expr_span(expr);
        let span = if let Some(semi) = self.eat(TokenKind::Semicolon)? {
            expr_span.merge(semi.span)
        } else if self.arena.get_expr(expr).kind.is_block_like() {
            expr_span
        } else {
            return Err(self.error_here(ParseErrorKind::ExpectSemi));
        };
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Expr(expr), span)))
    }

    /// `letStmt = "let" NAME (":" NAME)? "=" expr ";"`
    ///
    /// The `;` may be left off when the `let` is the last thing in a block.
    fn parse_let(&mut self, position: StmtPosition) -> Result<StmtId, ParseError> {
        let start = self.advance()?.span;

        let TokenKind::Ident(name) = self.current_kind() else {
            return Err(self.error_here(ParseErrorKind::ExpectName));
        };
        self.advance()?;

        let ty = if self.eat(TokenKind::Colon)?.is_some() {
            let TokenKind::Ident(ty_name) = self.current_kind() else {
                return Err(self.error_here(ParseErrorKind::ExpectName));
            };
            let ty_span = self.advance()?.span;
            Some(TypeAscription {
                name: ty_name,
                span: ty_span,
            })
        } else {
            None
        };

        self.expect(TokenKind::Eq, ParseErrorKind::ExpectEqual)?;
        let value = self.parse_expr()?;

        let end = if let Some(semi) = self.eat(TokenKind::Semicolon)? {
            semi.span
        } else if position == StmtPosition::InBlock && self.check(TokenKind::RBrace) {
            self.expr_span(value)
        } else {
            return Err(self.error_here(ParseErrorKind::ExpectSemi));
        };

        let span = start.merge(end);
        trace!(span = %span, "let statement");
        Ok(self
            .arena
            .alloc_stmt(Stmt::new(StmtKind::Let { name, ty, value }, span)))
    }

    /// `block = "{" stmt* expr? "}"`
    ///
    /// The current token must be `{`. A bare expression directly followed
    /// by `}` becomes the block's value.
    pub(crate) fn parse_block(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance()?.span;
        let mut stmts = Vec::new();
        let mut result = None;

        loop {
            match self.current_kind() {
                TokenKind::RBrace => break,
                TokenKind::Eof => return Err(self.error_here(ParseErrorKind::ExpectBraceClose)),
                TokenKind::Let => stmts.push(self.parse_let(StmtPosition::InBlock)?),
                _ => {
                    let expr = self.parse_expr()?;
                    if self.check(TokenKind::RBrace) {
                        result = Some(expr);
                        break;
                    }
                    stmts.push(self.finish_expr_stmt(expr)?);
                }
            }
        }

        let end = self.advance()?.span;
        let stmts = self.arena.alloc_stmt_list(stmts);
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Block { stmts, result },
            start.merge(end),
        )))
    }
}
