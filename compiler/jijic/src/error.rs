//! Errors returned by the compiler entry points.

use std::io;
use std::path::{Path, PathBuf};

use jiji_diagnostic::InternalError;
use jiji_ir::{SourceFile, StringInterner};
use thiserror::Error;

use crate::Problem;

/// Why a compilation failed.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The program has an error. `rendered` is `path:line:column  message`.
    #[error("{rendered}")]
    Source { problem: Problem, rendered: String },

    #[error("no permission to read file at {}", path.display())]
    NoPermission { path: PathBuf },

    #[error("{} is a directory, not a file", path.display())]
    IsDirectory { path: PathBuf },

    #[error("no file exists at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A compiler defect; never caused by the program itself.
    #[error("internal compiler error: {0}")]
    Internal(#[from] InternalError),
}

impl CompileError {
    /// Render `problem` against the file it was found in.
    pub fn from_problem(
        problem: impl Into<Problem>,
        file: &SourceFile,
        interner: &StringInterner,
    ) -> Self {
        let problem = problem.into();
        let rendered = problem.to_diagnostic(interner).render(file);
        CompileError::Source { problem, rendered }
    }

    /// Classify a failed read of `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => CompileError::NoPermission { path },
            io::ErrorKind::IsADirectory => CompileError::IsDirectory { path },
            io::ErrorKind::NotFound => CompileError::NotFound { path },
            _ => CompileError::Io { path, source },
        }
    }

    /// The structured problem, if the program itself is at fault.
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            CompileError::Source { problem, .. } => Some(problem),
            _ => None,
        }
    }

    /// Whether the input could not be read.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            CompileError::NoPermission { .. }
                | CompileError::IsDirectory { .. }
                | CompileError::NotFound { .. }
                | CompileError::Io { .. }
        )
    }
}
