//! JavaScript code generation for Jiji.
//!
//! Lowers a resolved, type-checked module to a single strict-mode
//! JavaScript program. Every top-level expression statement with a
//! non-`Unit` type prints its value with `console.log`.
//!
//! # Architecture
//!
//! - [`CodegenContext`]: storage identifiers, side tables and temp counter
//! - `js::expr`: expression lowering to (side effects, result) pairs
//! - `js::stmt`: statement lowering
//!
//! # Example
//!
//! `let x = if true { 5 } else { 10 }; x + 1;` becomes
//!
//! ```text
//! "use strict";let $tmp0;if (true) {$tmp0 = 5;} else {$tmp0 = 10;}let x = $tmp0;console.log(x + 1);
//! ```

mod context;
mod js;

pub use context::{is_reserved, CodegenContext};
pub use js::Lowered;

use jiji_diagnostic::InternalError;
use jiji_ir::{ExprArena, Module, StringInterner};
use jiji_resolve::Environment;
use jiji_types::TypeTable;

use crate::js::StmtPosition;

/// Prologue of every generated program.
pub const PROLOGUE: &str = "\"use strict\";";

/// JavaScript code generator for one module.
pub struct Codegen<'a> {
    arena: &'a ExprArena,
    ctx: CodegenContext<'a>,
}

impl<'a> Codegen<'a> {
    pub fn new(
        arena: &'a ExprArena,
        env: &'a Environment,
        types: &'a TypeTable,
        interner: &'a StringInterner,
    ) -> Self {
        Codegen {
            arena,
            ctx: CodegenContext::new(interner, env, types),
        }
    }

    /// Generate the program for `module`.
    ///
    /// Fails only if a side table is missing an entry the earlier passes
    /// should have recorded.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn generate(mut self, module: &Module) -> Result<String, InternalError> {
        let mut out = String::from(PROLOGUE);
        for &stmt in self.arena.get_stmt_list(module.stmts) {
            let code = self.lower_stmt(stmt, StmtPosition::TopLevel)?;
            out.push_str(&code);
        }
        tracing::debug!(bytes = out.len(), "generated javascript");
        Ok(out)
    }
}

/// Generate JavaScript for `module` in one step.
pub fn generate(
    arena: &ExprArena,
    module: &Module,
    env: &Environment,
    types: &TypeTable,
    interner: &StringInterner,
) -> Result<String, InternalError> {
    Codegen::new(arena, env, types, interner).generate(module)
}

#[cfg(test)]
mod tests;
