//! Diagnostic system for error reporting.
//!
//! Every user-facing compiler error becomes a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - the span where it went wrong
//!
//! A diagnostic renders against its [`SourceFile`](jiji_ir::SourceFile) as a
//! single line, `path:line:column  message`.
//!
//! Compiler defects are a separate class, [`InternalError`]. They are never
//! caused by the program being compiled and are not rendered with a source
//! location.

mod diagnostic;
mod error_code;
mod internal;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use internal::InternalError;
