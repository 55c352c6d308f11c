//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions and statements
//! - Child references use `ExprId` / `StmtId` indices
//! - Lists (block bodies, `if` branches) use ranges into flat vectors

use crate::ast::{Expr, IfBranch, Stmt};
use crate::{BranchRange, ExprId, StmtId, StmtRange};

/// Contiguous storage for every node of one module.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// All statements (indexed by `StmtId`).
    stmts: Vec<Stmt>,

    /// Flattened statement lists for blocks and the module body.
    stmt_lists: Vec<StmtId>,

    /// All `if` / `else if` branches.
    branches: Vec<IfBranch>,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "node counts are bounded by source length, which fits in u32"
)]
fn to_u32(n: usize) -> u32 {
    debug_assert!(u32::try_from(n).is_ok());
    n as u32
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 expression per 4 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_exprs = source_len / 4;
        ExprArena {
            exprs: Vec::with_capacity(estimated_exprs),
            stmts: Vec::with_capacity(estimated_exprs / 4),
            stmt_lists: Vec::with_capacity(estimated_exprs / 4),
            branches: Vec::with_capacity(estimated_exprs / 16),
        }
    }

    // ===== Expressions =====

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Statements =====

    /// Allocate statement, return ID.
    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Get number of statements.
    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Allocate a statement list, return its range.
    ///
    /// Nested blocks allocate their own lists while the outer list is still
    /// being collected, so callers gather IDs first and allocate once.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_u32(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        StmtRange::new(start, to_u32(self.stmt_lists.len()) - start)
    }

    /// Get statement IDs by range.
    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }

    // ===== If branches =====

    /// Allocate the branches of one `if`, return their range.
    pub fn alloc_branches(&mut self, branches: impl IntoIterator<Item = IfBranch>) -> BranchRange {
        let start = to_u32(self.branches.len());
        self.branches.extend(branches);
        BranchRange::new(start, to_u32(self.branches.len()) - start)
    }

    /// Get branches by range.
    #[inline]
    pub fn get_branches(&self, range: BranchRange) -> &[IfBranch] {
        let start = range.start as usize;
        &self.branches[start..start + range.len()]
    }
}
