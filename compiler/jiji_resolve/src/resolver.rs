//! The resolution pass.

use jiji_ir::{ExprArena, ExprId, ExprKind, Module, StmtId, StmtKind, StmtRange};
use jiji_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::scope::{ScopeId, ScopeKind};
use crate::{Environment, ResolveError, ResolveErrorKind};

/// Walks a module once, recording the scope of every node and checking
/// that every name refers to a `let` that precedes it.
pub struct Resolver<'a> {
    arena: &'a ExprArena,
    env: Environment,
}

impl<'a> Resolver<'a> {
    pub fn new(arena: &'a ExprArena) -> Self {
        Resolver {
            arena,
            env: Environment::new(arena.expr_count(), arena.stmt_count()),
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve(mut self, module: &Module) -> Result<Environment, ResolveError> {
        let root = self.env.module_scope();
        self.resolve_stmt_list(module.stmts, root)?;
        tracing::debug!(
            scopes = self.env.scopes().scope_count(),
            bindings = self.env.scopes().binding_count(),
            "resolved module"
        );
        Ok(self.env)
    }

    /// Resolve statements in order, threading the scope each one leaves
    /// behind into the next. Returns the scope after the last statement.
    fn resolve_stmt_list(&mut self, stmts: StmtRange, scope: ScopeId) -> Result<ScopeId, ResolveError> {
        let arena = self.arena;
        let mut current = scope;
        for &stmt in arena.get_stmt_list(stmts) {
            current = self.resolve_stmt(stmt, current)?;
        }
        Ok(current)
    }

    fn resolve_stmt(&mut self, id: StmtId, scope: ScopeId) -> Result<ScopeId, ResolveError> {
        let arena = self.arena;
        match arena.get_stmt(id).kind {
            StmtKind::Let { name, value, .. } => {
                self.resolve_expr(value, scope)?;

                let tree = self.env.tree_mut();
                let Some((holder, shadowed)) = tree.lookup_with_scope(scope, name) else {
                    tree.declare(scope, name);
                    self.env.set_stmt_scope(id, scope);
                    return Ok(scope);
                };

                let shadow = tree.push_child(scope, ScopeKind::Shadow);
                let same_frame = tree.frame_of(holder) == tree.frame_of(scope);
                if same_frame {
                    let storage = tree.binding(shadowed).storage;
                    tree.declare_in_storage(shadow, name, storage);
                    self.env.mark_redeclaration(id);
                } else {
                    tree.declare(shadow, name);
                }
                trace!(?shadow, same_frame, "shadowing let");
                self.env.set_stmt_scope(id, shadow);
                Ok(shadow)
            }
            StmtKind::Expr(expr) => {
                self.env.set_stmt_scope(id, scope);
                self.resolve_expr(expr, scope)?;
                Ok(scope)
            }
        }
    }

    fn resolve_expr(&mut self, id: ExprId, scope: ScopeId) -> Result<(), ResolveError> {
        ensure_sufficient_stack(|| self.resolve_expr_inner(id, scope))
    }

    fn resolve_expr_inner(&mut self, id: ExprId, scope: ScopeId) -> Result<(), ResolveError> {
        self.env.set_expr_scope(id, scope);
        let arena = self.arena;
        let expr = arena.get_expr(id);

        match expr.kind {
            ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::Bool(_) | ExprKind::String(_) => {
                Ok(())
            }
            ExprKind::Ident(name) => {
                if self.env.lookup(scope, name).is_some() {
                    Ok(())
                } else {
                    Err(ResolveError::new(
                        ResolveErrorKind::UnknownBinding(name),
                        expr.span,
                    ))
                }
            }
            ExprKind::Unary { operand, .. } => self.resolve_expr(operand, scope),
            ExprKind::Binary { left, right, .. } => {
                self.resolve_expr(left, scope)?;
                self.resolve_expr(right, scope)
            }
            ExprKind::Group(inner) => self.resolve_expr(inner, scope),
            ExprKind::Block { stmts, result } => {
                let block_scope = self.env.tree_mut().push_child(scope, ScopeKind::Block);
                trace!(?block_scope, "block scope");
                let current = self.resolve_stmt_list(stmts, block_scope)?;
                match result {
                    Some(result) => self.resolve_expr(result, current),
                    None => Ok(()),
                }
            }
            ExprKind::If {
                branches,
                else_block,
            } => {
                for branch in arena.get_branches(branches) {
                    self.resolve_expr(branch.cond, scope)?;
                    self.resolve_expr(branch.block, scope)?;
                }
                match else_block {
                    Some(block) => self.resolve_expr(block, scope),
                    None => Ok(()),
                }
            }
        }
    }
}
