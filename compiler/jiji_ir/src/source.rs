//! Source files and human-readable locations.

use std::fmt;

use crate::Span;

/// An immutable compilation unit: a path and its full text.
///
/// The path is only used for rendering diagnostics; it is never opened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceFile {
    path: String,
    contents: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            contents: contents.into(),
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Line and column of the start of `span`.
    ///
    /// Lines are counted by `\n` bytes before the offset. The column is the
    /// number of characters since the last newline. Both are 1-based.
    pub fn location(&self, span: Span) -> Location<'_> {
        let offset = (span.start as usize).min(self.contents.len());
        let before = self.contents.get(..offset).unwrap_or(&self.contents);
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;
        Location {
            path: &self.path,
            line: u32::try_from(line).unwrap_or(u32::MAX),
            column: u32::try_from(column).unwrap_or(u32::MAX),
        }
    }
}

/// A resolved source position, `path:line:column`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Location<'a> {
    pub path: &'a str,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}
