//! Per-expression type side table.

use jiji_diagnostic::InternalError;
use jiji_ir::{ExprId, Type};

/// The type of every expression in a module, indexed by `ExprId`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeTable {
    exprs: Vec<Option<Type>>,
}

impl TypeTable {
    pub fn with_len(expr_count: usize) -> Self {
        TypeTable {
            exprs: vec![None; expr_count],
        }
    }

    /// The recorded type, or `None` if the expression was never checked.
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<Type> {
        self.exprs.get(id.index()).copied().flatten()
    }

    /// Like [`get`](Self::get), treating a missing entry as a compiler bug.
    pub fn require(&self, id: ExprId) -> Result<Type, InternalError> {
        self.get(id).ok_or(InternalError::MissingExprType(id))
    }

    pub(crate) fn set(&mut self, id: ExprId, ty: Type) {
        let slot = &mut self.exprs[id.index()];
        debug_assert!(slot.is_none(), "type recorded twice for {id:?}");
        *slot = Some(ty);
    }
}
