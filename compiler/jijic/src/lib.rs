//! Jiji Compiler
//!
//! Compiles one Jiji source file to one JavaScript program.
//!
//! # Architecture
//!
//! ```text
//! SourceFile
//!     │
//!     ▼
//! jiji_parse::parse ──► ExprArena + Module   (pulls tokens from jiji_lexer)
//!     │
//!     ▼
//! jiji_resolve::resolve ──► Environment
//!     │
//!     ▼
//! jiji_types::check ──► TypeTable
//!     │
//!     ▼
//! jiji_codegen::generate ──► String
//! ```
//!
//! Each stage stops at its first error. User errors come back as
//! [`CompileError::Source`], rendered as `path:line:column  message`.

mod error;
mod problem;
pub mod tracing_setup;

pub use error::CompileError;
pub use problem::Problem;

use std::path::Path;

use jiji_ir::{SourceFile, StringInterner};
use jiji_types::CheckError;

/// Path reported for source compiled from a string.
pub const INLINE_PATH: &str = "<code>";

/// Compile source text.
pub fn compile(text: &str) -> Result<String, CompileError> {
    compile_source(&SourceFile::new(INLINE_PATH, text))
}

/// Compile a source file through every stage.
#[tracing::instrument(level = "debug", skip_all, fields(path = file.path()))]
pub fn compile_source(file: &SourceFile) -> Result<String, CompileError> {
    let mut interner = StringInterner::new();

    let output = match jiji_parse::parse(file, &mut interner) {
        Ok(output) => output,
        Err(err) => return Err(CompileError::from_problem(err, file, &interner)),
    };
    let (arena, module) = (&output.arena, &output.module);

    let mut env = jiji_resolve::resolve(arena, module)
        .map_err(|err| CompileError::from_problem(err, file, &interner))?;

    let types = jiji_types::check(arena, module, &mut env, &interner).map_err(|err| match err {
        CheckError::Type(err) => CompileError::from_problem(err, file, &interner),
        CheckError::Internal(err) => CompileError::Internal(err),
    })?;

    let js = jiji_codegen::generate(arena, module, &env, &types, &interner)?;
    Ok(js)
}

/// Read a UTF-8 file and compile it.
pub async fn compile_file(path: impl AsRef<Path>) -> Result<String, CompileError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| CompileError::read(path, err))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read source");
    compile_source(&SourceFile::new(path.display().to_string(), contents))
}
