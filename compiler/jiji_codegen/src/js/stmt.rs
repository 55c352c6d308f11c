//! Statement lowering.

use std::fmt::Write;

use jiji_diagnostic::InternalError;
use jiji_ir::{StmtId, StmtKind, Type};
use tracing::trace;

use super::StmtPosition;
use crate::Codegen;

impl Codegen<'_> {
    pub(crate) fn lower_stmt(
        &mut self,
        id: StmtId,
        position: StmtPosition,
    ) -> Result<String, InternalError> {
        let arena = self.arena;
        match arena.get_stmt(id).kind {
            StmtKind::Let { name, value, .. } => {
                let value = self.lower_expr(value)?;
                let ident = self.ctx.ident_for_let(id, name)?;
                let keyword = if self.ctx.is_redeclaration(id) {
                    ""
                } else {
                    "let "
                };
                trace!(ident, redeclaration = keyword.is_empty(), "let");
                let mut out = value.side_effects;
                let _ = write!(out, "{keyword}{ident} = {};", value.result);
                Ok(out)
            }
            StmtKind::Expr(expr) => {
                let lowered = self.lower_expr(expr)?;
                let mut out = lowered.side_effects;
                if position == StmtPosition::TopLevel && self.ctx.expr_type(expr)? != Type::Unit {
                    let _ = write!(out, "console.log({});", lowered.result);
                }
                Ok(out)
            }
        }
    }
}
