//! Type checking for Jiji.
//!
//! Every expression gets exactly one of the five primitive types. There is
//! no inference across statements beyond reading a `let` binding's type
//! from the value it was initialized with.
//!
//! Runs after resolution: every name is known to have a binding, so a
//! missing binding or scope here is an [`InternalError`] rather than a
//! user error.
//!
//! [`InternalError`]: jiji_diagnostic::InternalError

mod checker;
mod error;
mod ops;
mod table;

pub use checker::TypeChecker;
pub use error::{CheckError, TypeError, TypeErrorKind};
pub use ops::TypeOps;
pub use table::TypeTable;

use jiji_ir::{ExprArena, Module, StringInterner};
use jiji_resolve::Environment;

/// Type check `module` in one step.
pub fn check(
    arena: &ExprArena,
    module: &Module,
    env: &mut Environment,
    interner: &StringInterner,
) -> Result<TypeTable, CheckError> {
    let mut checker = TypeChecker::new(arena, env, interner);
    checker.check_module(module)?;
    Ok(checker.finish())
}
