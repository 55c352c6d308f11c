//! Primary expressions: literals, names, parenthesized groups and `if`.

use jiji_ir::{Expr, ExprId, ExprKind, IfBranch, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::Int(value) => ExprKind::Int(value),
            TokenKind::Float(bits) => ExprKind::Float(bits),
            TokenKind::String(name) => ExprKind::String(name),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::LParen => return self.parse_group(),
            _ => return Err(self.error_here(ParseErrorKind::ExpectExpr)),
        };
        self.advance()?;
        Ok(self.arena.alloc_expr(Expr::new(kind, token.span)))
    }

    /// `"(" expr ")"`, kept as a node so spans and output parentheses survive.
    fn parse_group(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance()?.span;
        let inner = self.parse_expr()?;
        let end = self
            .expect(TokenKind::RParen, ParseErrorKind::ExpectParenClose)?
            .span;
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Group(inner), start.merge(end))))
    }

    /// `ifExpr = "if" expr block ("else" "if" expr block)* ("else" block)?`
    ///
    /// Conditions cannot themselves be blocks or `if`s without parentheses.
    pub(crate) fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.advance()?.span;
        let mut branches = Vec::new();
        let mut else_block = None;
        let mut end;

        loop {
            let cond = self.parse_relational()?;
            let block = self.parse_required_block()?;
            end = self.expr_span(block);
            branches.push(IfBranch { cond, block });

            if self.eat(TokenKind::Else)?.is_none() {
                break;
            }
            if self.eat(TokenKind::If)?.is_none() {
                let block = self.parse_required_block()?;
                end = self.expr_span(block);
                else_block = Some(block);
                break;
            }
        }

        let span = start.merge(end);
        let branches = self.arena.alloc_branches(branches);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::If { branches, else_block }, span)))
    }

    fn parse_required_block(&mut self) -> Result<ExprId, ParseError> {
        if self.check(TokenKind::LBrace) {
            self.parse_block()
        } else {
            Err(self.error_here(ParseErrorKind::ExpectBlock))
        }
    }
}
