//! Stack safety for the recursive compiler passes.
//!
//! Parsing, resolution, type checking and code generation all recurse once
//! per level of source nesting. `((((1))))` nested a hundred thousand deep
//! is valid input, so every recursive entry point goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

/// Minimum stack space to keep available.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn check_expr(&mut self, id: ExprId) -> Result<Type, CheckError> {
///     ensure_sufficient_stack(|| self.check_expr_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
