//! Token cursor with one token of lookahead.
//!
//! Wraps the lexer so the parser can inspect the current token without
//! consuming it. Tokens are pulled from the lexer only as the parser
//! advances, so a lexical error surfaces at the point the parser reaches
//! the offending text.

use jiji_ir::{Span, Token, TokenKind};
use jiji_lexer::{LexError, Lexer};

pub struct Cursor<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first token.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, LexError> {
        let current = lexer.next_token()?;
        Ok(Cursor { lexer, current })
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it.
    ///
    /// Past the end this keeps returning `Eof`.
    pub fn advance(&mut self) -> Result<Token, LexError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }
}
