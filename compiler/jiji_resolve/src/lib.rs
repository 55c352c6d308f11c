//! Name resolution for Jiji.
//!
//! Builds the [`ScopeTree`] for a module and records, for every expression
//! and statement, the scope it was resolved in. Later passes find a
//! name's binding by looking it up from that recorded scope.
//!
//! # Scopes
//!
//! - The module body runs in the root scope.
//! - Each block (including every `if` branch) opens a block scope.
//! - A `let` whose name is already visible opens a shadow scope, so code
//!   before the `let` keeps seeing the old binding.
//!
//! # Storage
//!
//! Each binding is backed by a storage, the variable it becomes in the
//! generated JavaScript. A `let` that shadows a binding from the same
//! frame (the nearest root or block scope) reuses that binding's storage;
//! see [`Environment::is_redeclaration`].

mod environment;
mod error;
mod resolver;
mod scope;

pub use environment::Environment;
pub use error::{ResolveError, ResolveErrorKind};
pub use resolver::Resolver;
pub use scope::{Binding, BindingId, Scope, ScopeId, ScopeKind, ScopeTree, StorageId};

use jiji_ir::{ExprArena, Module};

/// Resolve `module` in one step.
pub fn resolve(arena: &ExprArena, module: &Module) -> Result<Environment, ResolveError> {
    Resolver::new(arena).resolve(module)
}
