//! Lexer for Jiji.
//!
//! A hand-written scanner that produces one [`Token`] per call to
//! [`Lexer::next_token`]. The parser pulls tokens on demand; [`lex`]
//! collects a whole file for tests and tracing.
//!
//! # Token grammar
//!
//! - Whitespace (space, tab, CR, LF) and `--` line comments are skipped.
//! - Identifiers are `[A-Za-z_][A-Za-z0-9_]*`; `true false let if else`
//!   are keywords.
//! - Numbers are digit runs with `_` separators, an optional `.digits`
//!   fraction and an optional `e[+-]digits` exponent. Either part makes
//!   the literal a float.
//! - `'...'` strings are raw; `"..."` strings cook escapes (see `escape`).
//! - Symbols: `; + - * / % ( ) { } : ~ = == ! != < <= > >=`.
//!
//! After the end of input, every call returns an `Eof` token with an empty
//! span at the end of the source.

mod cursor;
mod escape;
pub mod lex_error;

use jiji_ir::{SourceFile, Span, StringInterner, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::escape::cook_escape;
pub use crate::lex_error::{LexError, LexErrorKind};

/// Stateful scanner over one source file.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    interner: &'a mut StringInterner,
    too_large: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `file`.
    ///
    /// Identifiers and string contents are interned into `interner`.
    pub fn new(file: &'a SourceFile, interner: &'a mut StringInterner) -> Self {
        let source = file.contents();
        Lexer {
            cursor: Cursor::new(source),
            interner,
            too_large: u32::try_from(source.len()).is_err(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with an empty span once the source is exhausted, and
    /// keeps returning it on later calls.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.too_large {
            return Err(LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY));
        }

        self.skip_trivia();

        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            0 if self.cursor.is_eof() => TokenKind::Eof,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start)?,
            b'\'' => self.raw_string(start)?,
            b'"' => self.string(start)?,
            b';' => self.single(TokenKind::Semicolon),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'%' => self.single(TokenKind::Percent),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b':' => self.single(TokenKind::Colon),
            b'~' => self.single(TokenKind::Tilde),
            b'=' => self.one_or_two(TokenKind::Eq, TokenKind::EqEq),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEq),
            b'<' => self.one_or_two(TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.one_or_two(TokenKind::Gt, TokenKind::GtEq),
            _ => return Err(self.unknown_char(start)),
        };

        let token = Token::new(kind, Span::new(start, self.cursor.pos()));
        trace!(kind = token.kind.display_name(), span = %token.span, "token");
        Ok(token)
    }

    // ─── Trivia ────────────────────────────────────────────────────────

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => self.cursor.advance(),
                b'-' if self.cursor.peek() == b'-' => self.cursor.eat_until_newline_or_eof(),
                _ => return,
            }
        }
    }

    // ─── Identifiers & Keywords ────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> TokenKind {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(start);
        TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Ident(self.interner.intern(text)))
    }

    // ─── Numeric Literals ──────────────────────────────────────────────

    fn number(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.eat_decimal_digits();
        let mut is_float = false;

        if self.cursor.eat(b'.') {
            is_float = true;
            if !self.eat_digit_run() {
                return Err(self.error_from(LexErrorKind::MissingFrac, start));
            }
        }

        if self.cursor.eat(b'e') || self.cursor.eat(b'E') {
            is_float = true;
            let _ = self.cursor.eat(b'-') || self.cursor.eat(b'+');
            if !self.eat_digit_run() {
                return Err(self.error_from(LexErrorKind::MissingExp, start));
            }
        }

        let digits: String = self
            .cursor
            .slice_from(start)
            .chars()
            .filter(|&c| c != '_')
            .collect();

        if is_float {
            // The scanner only admits text that `f64::from_str` accepts.
            let value: f64 = digits
                .parse()
                .map_err(|_| self.error_from(LexErrorKind::MissingFrac, start))?;
            Ok(TokenKind::Float(value.to_bits()))
        } else {
            digits
                .parse()
                .map(TokenKind::Int)
                .map_err(|_| self.error_from(LexErrorKind::IntOverflow, start))
        }
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    /// Eat a digit followed by digits and underscores. False if no digit.
    fn eat_digit_run(&mut self) -> bool {
        if !self.cursor.current().is_ascii_digit() {
            return false;
        }
        self.eat_decimal_digits();
        true
    }

    // ─── String Literals ───────────────────────────────────────────────

    /// `'...'`: no escapes, may span lines.
    fn raw_string(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.cursor.advance(); // opening quote
        self.cursor.eat_while(|b| b != b'\'');
        if !self.cursor.eat(b'\'') {
            return Err(self.error_from(LexErrorKind::UnclosedString, start));
        }
        let text = self.cursor.slice(start + 1, self.cursor.pos() - 1);
        Ok(TokenKind::String(self.interner.intern(text)))
    }

    /// `"..."`: escapes cooked as they are scanned.
    fn string(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.cursor.advance(); // opening quote
        let mut text = String::new();

        loop {
            if self.cursor.is_eof() {
                return Err(self.error_from(LexErrorKind::UnclosedString, start));
            }
            match self.cursor.current() {
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => cook_escape(&mut self.cursor, start, &mut text)?,
                _ => {
                    let run_start = self.cursor.pos();
                    self.cursor.eat_while(|b| b != b'"' && b != b'\\');
                    text.push_str(self.cursor.slice_from(run_start));
                }
            }
        }

        Ok(TokenKind::String(self.interner.intern(&text)))
    }

    // ─── Symbols ───────────────────────────────────────────────────────

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `c` alone, or `c=` as one token.
    fn one_or_two(&mut self, one: TokenKind, with_eq: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.eat(b'=') {
            with_eq
        } else {
            one
        }
    }

    fn unknown_char(&mut self, start: u32) -> LexError {
        let c = self.cursor.current_char().unwrap_or('\u{fffd}');
        self.cursor.advance_char();
        self.error_from(LexErrorKind::UnknownChar(c), start)
    }

    fn error_from(&self, kind: LexErrorKind, start: u32) -> LexError {
        LexError::new(kind, Span::new(start, self.cursor.pos()))
    }
}

/// Lex a whole file, up to and including the `Eof` token.
pub fn lex(file: &SourceFile, interner: &mut StringInterner) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(file, interner);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests;
