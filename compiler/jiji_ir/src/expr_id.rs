//! Node IDs and ranges for the flat AST.
//!
//! - `ExprId(u32)` / `StmtId(u32)` instead of `Box<Expr>` children
//! - `StmtRange` / `BranchRange` for lists stored contiguously in the arena

use std::fmt;

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index into the statement arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Range of statement IDs in the arena's flattened statement lists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct StmtRange {
    pub start: u32,
    pub len: u32,
}

impl StmtRange {
    pub const EMPTY: StmtRange = StmtRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        StmtRange { start, len }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

impl fmt::Debug for StmtRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtRange({}..{})", self.start, self.start + self.len)
    }
}

/// Range of `if` branches in the arena.
///
/// Always non-empty for a parsed `if`: the first branch is the `if` itself,
/// the rest are its `else if` continuations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct BranchRange {
    pub start: u32,
    pub len: u32,
}

impl BranchRange {
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        BranchRange { start, len }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for BranchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BranchRange({}..{})", self.start, self.start + self.len)
    }
}
