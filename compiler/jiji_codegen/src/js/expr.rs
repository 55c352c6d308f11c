//! Expression lowering.

use std::fmt::Write;

use jiji_diagnostic::InternalError;
use jiji_ir::quote::quote_json;
use jiji_ir::{BinaryOp, BranchRange, ExprId, ExprKind, StmtRange, Type, UnaryOp};
use jiji_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{float_literal, js_binary_op, prec, Lowered, StmtPosition};
use crate::Codegen;

impl Codegen<'_> {
    /// Lower an expression to its side effects and result fragment.
    pub(crate) fn lower_expr(&mut self, id: ExprId) -> Result<Lowered, InternalError> {
        ensure_sufficient_stack(|| self.lower_expr_inner(id))
    }

    fn lower_expr_inner(&mut self, id: ExprId) -> Result<Lowered, InternalError> {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        match expr.kind {
            ExprKind::Int(value) => Ok(Lowered::pure(value.to_string(), prec::ATOM)),
            ExprKind::Float(bits) => Ok(Lowered::pure(
                float_literal(f64::from_bits(bits)),
                prec::ATOM,
            )),
            ExprKind::Bool(value) => Ok(Lowered::pure(
                if value { "true" } else { "false" },
                prec::ATOM,
            )),
            ExprKind::String(name) => Ok(Lowered::pure(
                quote_json(self.ctx.interner.lookup(name)),
                prec::ATOM,
            )),
            ExprKind::Ident(name) => {
                let ident = self.ctx.ident_for_expr(id, name)?;
                Ok(Lowered::pure(ident, prec::ATOM))
            }
            ExprKind::Unary { op, operand } => self.lower_unary(op, operand),
            ExprKind::Binary { op, left, right } => self.lower_binary(op, left, right),
            ExprKind::Group(inner) => {
                let inner = self.lower_expr(inner)?;
                Ok(Lowered {
                    side_effects: inner.side_effects,
                    result: format!("({})", inner.result),
                    prec: prec::ATOM,
                })
            }
            ExprKind::Block { stmts, result } => self.lower_block(id, stmts, result),
            ExprKind::If {
                branches,
                else_block,
            } => self.lower_if(id, branches, else_block),
        }
    }

    fn lower_unary(&mut self, op: UnaryOp, operand: ExprId) -> Result<Lowered, InternalError> {
        let operand = self.lower_expr(operand)?;
        let text = operand.operand(prec::UNARY);
        // `- -1` must not become the decrement operator.
        let sep = if text.starts_with(|c: char| c == '-' || c == '+') { " " } else { "" };
        Ok(Lowered {
            result: format!("{}{sep}{text}", op.as_symbol()),
            side_effects: operand.side_effects,
            prec: prec::UNARY,
        })
    }

    fn lower_binary(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> Result<Lowered, InternalError> {
        let int_division = op == BinaryOp::Div && self.ctx.expr_type(left)? == Type::Int;
        let left = self.lower_expr(left)?;
        let right = self.lower_expr(right)?;

        let (symbol, op_prec) = js_binary_op(op);
        // Left-associative: an equal-precedence right operand needs parens.
        let text = format!(
            "{} {symbol} {}",
            left.operand(op_prec),
            right.operand(op_prec + 1)
        );
        let (result, prec) = if int_division {
            (format!("Math.trunc({text})"), prec::ATOM)
        } else {
            (text, op_prec)
        };

        let mut side_effects = left.side_effects;
        side_effects.push_str(&right.side_effects);
        Ok(Lowered {
            side_effects,
            result,
            prec,
        })
    }

    /// A block used as a value: `let $tmpN;{...; $tmpN = result;}`.
    fn lower_block(
        &mut self,
        id: ExprId,
        stmts: StmtRange,
        result: Option<ExprId>,
    ) -> Result<Lowered, InternalError> {
        let temp = self.temp_for(id)?;
        let mut out = String::new();
        if let Some(temp) = &temp {
            let _ = write!(out, "let {temp};");
        }
        out.push('{');
        self.lower_block_body(stmts, result, temp.as_deref(), &mut out)?;
        out.push('}');
        Ok(Self::hoisted(out, temp))
    }

    /// An `if` used as a value. Every branch assigns the same temporary.
    ///
    /// Conditions after the first are evaluated only when reached: one
    /// with side effects opens an `else` block holding those effects and
    /// the rest of the chain.
    fn lower_if(
        &mut self,
        id: ExprId,
        branches: BranchRange,
        else_block: Option<ExprId>,
    ) -> Result<Lowered, InternalError> {
        let temp = self.temp_for(id)?;
        let mut out = String::new();
        if let Some(temp) = &temp {
            let _ = write!(out, "let {temp};");
        }

        let arena = self.arena;
        let mut open_blocks = 0usize;
        for (i, branch) in arena.get_branches(branches).iter().enumerate() {
            let cond = self.lower_expr(branch.cond)?;
            if i > 0 {
                if cond.side_effects.is_empty() {
                    out.push_str(" else ");
                } else {
                    out.push_str(" else {");
                    open_blocks += 1;
                }
            }
            out.push_str(&cond.side_effects);
            let _ = write!(out, "if ({}) {{", cond.result);
            self.lower_branch(branch.block, temp.as_deref(), &mut out)?;
            out.push('}');
        }
        if let Some(block) = else_block {
            out.push_str(" else {");
            self.lower_branch(block, temp.as_deref(), &mut out)?;
            out.push('}');
        }
        for _ in 0..open_blocks {
            out.push('}');
        }

        trace!(branches = branches.len(), has_temp = temp.is_some(), "lowered if");
        Ok(Self::hoisted(out, temp))
    }

    /// Emit a branch block's contents without its own braces or temporary.
    fn lower_branch(
        &mut self,
        block: ExprId,
        temp: Option<&str>,
        out: &mut String,
    ) -> Result<(), InternalError> {
        let arena = self.arena;
        match arena.get_expr(block).kind {
            ExprKind::Block { stmts, result } => self.lower_block_body(stmts, result, temp, out),
            // The parser only builds blocks here; lower anything else whole.
            _ => {
                let lowered = self.lower_expr(block)?;
                Self::finish_body(lowered, temp, out);
                Ok(())
            }
        }
    }

    fn lower_block_body(
        &mut self,
        stmts: StmtRange,
        result: Option<ExprId>,
        temp: Option<&str>,
        out: &mut String,
    ) -> Result<(), InternalError> {
        let arena = self.arena;
        for &stmt in arena.get_stmt_list(stmts) {
            let code = self.lower_stmt(stmt, StmtPosition::Nested)?;
            out.push_str(&code);
        }
        if let Some(result) = result {
            let lowered = self.lower_expr(result)?;
            Self::finish_body(lowered, temp, out);
        }
        Ok(())
    }

    fn finish_body(lowered: Lowered, temp: Option<&str>, out: &mut String) {
        out.push_str(&lowered.side_effects);
        if let Some(temp) = temp {
            let _ = write!(out, "{temp} = {};", lowered.result);
        }
    }

    /// A fresh temporary for a non-`Unit` block or `if`.
    fn temp_for(&mut self, id: ExprId) -> Result<Option<String>, InternalError> {
        Ok(if self.ctx.expr_type(id)? == Type::Unit {
            None
        } else {
            Some(self.ctx.fresh_temp())
        })
    }

    fn hoisted(side_effects: String, temp: Option<String>) -> Lowered {
        Lowered {
            side_effects,
            result: temp.unwrap_or_else(|| "undefined".to_string()),
            prec: prec::ATOM,
        }
    }
}
