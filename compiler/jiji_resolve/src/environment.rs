//! Scope side table produced by the resolver.

use jiji_diagnostic::InternalError;
use jiji_ir::{ExprId, Name, StmtId, Type};

use crate::scope::{Binding, BindingId, ScopeId, ScopeTree};

/// The scope each node was resolved in, plus the scope tree itself.
///
/// Indexed densely by `ExprId` and `StmtId`. Every entry is written once
/// during resolution; reading a missing entry is an internal error.
#[derive(Clone, Debug)]
pub struct Environment {
    tree: ScopeTree,
    module_scope: ScopeId,
    expr_scopes: Vec<Option<ScopeId>>,
    stmt_scopes: Vec<Option<ScopeId>>,
    redeclarations: Vec<bool>,
}

impl Environment {
    pub(crate) fn new(expr_count: usize, stmt_count: usize) -> Self {
        let tree = ScopeTree::new();
        let module_scope = tree.root();
        Environment {
            tree,
            module_scope,
            expr_scopes: vec![None; expr_count],
            stmt_scopes: vec![None; stmt_count],
            redeclarations: vec![false; stmt_count],
        }
    }

    pub(crate) fn tree_mut(&mut self) -> &mut ScopeTree {
        &mut self.tree
    }

    pub(crate) fn set_expr_scope(&mut self, id: ExprId, scope: ScopeId) {
        let slot = &mut self.expr_scopes[id.index()];
        debug_assert!(slot.is_none(), "scope recorded twice for {id:?}");
        *slot = Some(scope);
    }

    pub(crate) fn set_stmt_scope(&mut self, id: StmtId, scope: ScopeId) {
        let slot = &mut self.stmt_scopes[id.index()];
        debug_assert!(slot.is_none(), "scope recorded twice for {id:?}");
        *slot = Some(scope);
    }

    pub(crate) fn mark_redeclaration(&mut self, id: StmtId) {
        self.redeclarations[id.index()] = true;
    }

    /// The module's root scope.
    #[inline]
    pub fn module_scope(&self) -> ScopeId {
        self.module_scope
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.tree
    }

    pub fn expr_scope(&self, id: ExprId) -> Result<ScopeId, InternalError> {
        self.expr_scopes
            .get(id.index())
            .copied()
            .flatten()
            .ok_or(InternalError::MissingExprScope(id))
    }

    /// For a `let`, the scope holding the binding it introduces.
    pub fn stmt_scope(&self, id: StmtId) -> Result<ScopeId, InternalError> {
        self.stmt_scopes
            .get(id.index())
            .copied()
            .flatten()
            .ok_or(InternalError::MissingStmtScope(id))
    }

    /// Whether this `let` rebinds a name from its own frame and therefore
    /// writes to the existing storage instead of declaring a new one.
    pub fn is_redeclaration(&self, id: StmtId) -> bool {
        self.redeclarations.get(id.index()).copied().unwrap_or(false)
    }

    #[inline]
    pub fn lookup(&self, scope: ScopeId, name: Name) -> Option<BindingId> {
        self.tree.lookup(scope, name)
    }

    #[inline]
    pub fn binding(&self, id: BindingId) -> &Binding {
        self.tree.binding(id)
    }

    /// Record a binding's type. Called once per binding by the type checker.
    pub fn assign_type(&mut self, id: BindingId, ty: Type) {
        self.tree.assign_type(id, ty);
    }

    /// Source names of every storage, indexed by `StorageId`.
    pub fn storages(&self) -> &[Name] {
        self.tree.storages()
    }
}
