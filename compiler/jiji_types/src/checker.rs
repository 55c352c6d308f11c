//! The type checking pass.

use jiji_diagnostic::InternalError;
use jiji_ir::{
    BinaryOp, BranchRange, ExprArena, ExprId, ExprKind, Module, Name, StmtId, StmtKind,
    StmtRange, StringInterner, Type, TypeAscription,
};
use jiji_resolve::{BindingId, Environment};
use jiji_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{CheckError, TypeError, TypeErrorKind, TypeOps, TypeTable};

/// Computes and records the type of every expression.
///
/// Expression types are memoized in a [`TypeTable`]; `let` binding types
/// are written into the [`Environment`] so later names can read them.
pub struct TypeChecker<'a> {
    arena: &'a ExprArena,
    env: &'a mut Environment,
    interner: &'a StringInterner,
    table: TypeTable,
}

impl<'a> TypeChecker<'a> {
    pub fn new(arena: &'a ExprArena, env: &'a mut Environment, interner: &'a StringInterner) -> Self {
        TypeChecker {
            arena,
            env,
            interner,
            table: TypeTable::with_len(arena.expr_count()),
        }
    }

    /// Check every statement of the module. A module's type is `Unit`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn check_module(&mut self, module: &Module) -> Result<Type, CheckError> {
        self.check_stmt_list(module.stmts)?;
        Ok(Type::Unit)
    }

    /// Consume the checker, returning the expression types.
    pub fn finish(self) -> TypeTable {
        self.table
    }

    /// The type of a statement, which is always `Unit` once its parts check.
    pub fn type_of_stmt(&mut self, id: StmtId) -> Result<Type, CheckError> {
        let arena = self.arena;
        match arena.get_stmt(id).kind {
            StmtKind::Expr(expr) => {
                self.type_of_expr(expr)?;
            }
            StmtKind::Let { name, ty, value } => {
                let found = self.type_of_expr(value)?;
                if let Some(ascription) = ty {
                    self.check_ascription(ascription, found, value)?;
                }
                let binding = self.let_binding(id, name)?;
                self.env.assign_type(binding, found);
                trace!(name = self.interner.lookup(name), ty = %found, "typed binding");
            }
        }
        Ok(Type::Unit)
    }

    /// The type of an expression, computed at most once.
    pub fn type_of_expr(&mut self, id: ExprId) -> Result<Type, CheckError> {
        if let Some(ty) = self.table.get(id) {
            return Ok(ty);
        }
        let ty = ensure_sufficient_stack(|| self.infer_expr(id))?;
        self.table.set(id, ty);
        Ok(ty)
    }

    fn infer_expr(&mut self, id: ExprId) -> Result<Type, CheckError> {
        let arena = self.arena;
        let expr = arena.get_expr(id);

        match expr.kind {
            ExprKind::Int(_) => Ok(Type::Int),
            ExprKind::Float(_) => Ok(Type::Float),
            ExprKind::Bool(_) => Ok(Type::Bool),
            ExprKind::String(_) => Ok(Type::String),
            ExprKind::Ident(name) => {
                let scope = self.env.expr_scope(id)?;
                let binding = self
                    .env
                    .lookup(scope, name)
                    .ok_or_else(|| self.unresolved(name))?;
                self.env.binding(binding).ty.ok_or_else(|| {
                    InternalError::UntypedBinding(self.interner.lookup(name).to_string()).into()
                })
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.type_of_expr(operand)?;
                operand.unary_op(op).ok_or_else(|| {
                    TypeError::new(TypeErrorKind::UnaryTypeMismatch { op, operand }, expr.span)
                        .into()
                })
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.type_of_expr(left)?;
                let right = self.type_of_expr(right)?;
                binary_result(left, op, right).ok_or_else(|| {
                    TypeError::new(
                        TypeErrorKind::BinaryTypeMismatch { left, op, right },
                        expr.span,
                    )
                    .into()
                })
            }
            ExprKind::Group(inner) => self.type_of_expr(inner),
            ExprKind::Block { stmts, result } => {
                self.check_stmt_list(stmts)?;
                match result {
                    Some(result) => self.type_of_expr(result),
                    None => Ok(Type::Unit),
                }
            }
            ExprKind::If {
                branches,
                else_block,
            } => self.infer_if(branches, else_block),
        }
    }

    /// Every condition must be `Bool` and every block must have the first
    /// block's type. Without an `else`, that type must be `Unit`.
    fn infer_if(&mut self, branches: BranchRange, else_block: Option<ExprId>) -> Result<Type, CheckError> {
        let arena = self.arena;
        let mut expected: Option<(Type, ExprId)> = None;

        for branch in arena.get_branches(branches) {
            let cond = self.type_of_expr(branch.cond)?;
            if cond != Type::Bool {
                return Err(self.type_error(
                    TypeErrorKind::IfCondNotBool { found: cond },
                    branch.cond,
                ));
            }
            let found = self.type_of_expr(branch.block)?;
            match expected {
                None => expected = Some((found, branch.block)),
                Some((expected, _)) if expected != found => {
                    return Err(self.type_error(
                        TypeErrorKind::IfTypeMismatch { expected, found },
                        branch.block,
                    ));
                }
                Some(_) => {}
            }
        }

        let Some((first, first_block)) = expected else {
            return Ok(Type::Unit);
        };

        match else_block {
            Some(block) => {
                let found = self.type_of_expr(block)?;
                if found != first {
                    return Err(self.type_error(
                        TypeErrorKind::IfTypeMismatch {
                            expected: first,
                            found,
                        },
                        block,
                    ));
                }
            }
            None if first != Type::Unit => {
                return Err(self.type_error(
                    TypeErrorKind::IfTypeMismatch {
                        expected: Type::Unit,
                        found: first,
                    },
                    first_block,
                ));
            }
            None => {}
        }
        Ok(first)
    }

    fn check_stmt_list(&mut self, stmts: StmtRange) -> Result<(), CheckError> {
        let arena = self.arena;
        for &stmt in arena.get_stmt_list(stmts) {
            self.type_of_stmt(stmt)?;
        }
        Ok(())
    }

    fn check_ascription(&self, ascription: TypeAscription, found: Type, value: ExprId) -> Result<(), CheckError> {
        let name = self.interner.lookup(ascription.name);
        let Some(expected) = Type::from_name(name) else {
            return Err(TypeError::new(
                TypeErrorKind::UnknownType(ascription.name),
                ascription.span,
            )
            .into());
        };
        if expected == found {
            Ok(())
        } else {
            Err(self.type_error(TypeErrorKind::LetTypeMismatch { expected, found }, value))
        }
    }

    /// The binding a `let` introduced, found in the scope the resolver
    /// recorded for it.
    fn let_binding(&self, id: StmtId, name: Name) -> Result<BindingId, CheckError> {
        let scope = self.env.stmt_scope(id)?;
        self.env
            .scopes()
            .get(scope)
            .get_local(name)
            .ok_or_else(|| self.unresolved(name))
    }

    #[cold]
    fn unresolved(&self, name: Name) -> CheckError {
        InternalError::UnresolvedName(self.interner.lookup(name).to_string()).into()
    }

    #[cold]
    fn type_error(&self, kind: TypeErrorKind, at: ExprId) -> CheckError {
        TypeError::new(kind, self.arena.get_expr(at).span).into()
    }
}

/// The result type of `left op right`, or `None` if the operands do not
/// support the operator.
fn binary_result(left: Type, op: BinaryOp, right: Type) -> Option<Type> {
    if op.is_equality() {
        (left == right).then_some(Type::Bool)
    } else if op.is_comparison() {
        left.is_orderable_against(right).then_some(Type::Bool)
    } else {
        left.basic_binary_op(op, right)
    }
}
