//! Internal compiler errors.

use jiji_ir::{ExprId, StmtId};
use thiserror::Error;

use crate::ErrorCode;

/// A broken invariant between compiler passes.
///
/// These indicate a defect in the compiler, never in the program being
/// compiled. They carry node IDs rather than source spans.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InternalError {
    #[error("no scope recorded for expression {0:?}")]
    MissingExprScope(ExprId),

    #[error("no scope recorded for statement {0:?}")]
    MissingStmtScope(StmtId),

    #[error("no type recorded for expression {0:?}")]
    MissingExprType(ExprId),

    #[error("binding `{0}` was not found after resolution")]
    UnresolvedName(String),

    #[error("binding `{0}` was read before its type was assigned")]
    UntypedBinding(String),
}

impl InternalError {
    /// All internal errors share one code.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::E9001
    }
}
