//! Recursive descent parser for Jiji.
//!
//! Produces a flat AST in an [`ExprArena`]. Parsing stops at the first
//! error; there is no recovery.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use jiji_ir::{ExprArena, ExprId, Module, SourceFile, Span, StringInterner, Token, TokenKind};
use jiji_lexer::Lexer;

/// A successfully parsed module and the arena that owns its nodes.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned on the lexer's first token.
    pub fn new(lexer: Lexer<'a>) -> Result<Self, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(lexer)?,
            arena: ExprArena::new(),
        })
    }

    /// Parse the whole input as a module.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> Result<ParseOutput, ParseError> {
        let module = self.parse_module()?;
        tracing::debug!(
            exprs = self.arena.expr_count(),
            stmts = self.arena.stmt_count(),
            "parsed module"
        );
        Ok(ParseOutput {
            module,
            arena: self.arena,
        })
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn advance(&mut self) -> Result<Token, ParseError> {
        Ok(self.cursor.advance()?)
    }

    /// Consume a token of `kind`, or fail with `error` at the current token.
    fn expect(&mut self, kind: TokenKind, error: ParseErrorKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.error_here(error))
        }
    }

    /// Consume a token of `kind` if present.
    fn eat(&mut self, kind: TokenKind) -> Result<Option<Token>, ParseError> {
        if self.check(kind) {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    #[cold]
    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::syntax(kind, self.current_span())
    }

    #[inline]
    fn expr_span(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}

/// Lex and parse `file` in one step.
pub fn parse(file: &SourceFile, interner: &mut StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(Lexer::new(file, interner))?.parse()
}

#[cfg(test)]
mod tests;
