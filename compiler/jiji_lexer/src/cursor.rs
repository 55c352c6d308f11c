//! Byte cursor over the source text.
//!
//! The cursor advances byte-by-byte. Reading past the end yields `0x00`;
//! an interior NUL byte also reads as `0x00`, so callers that care use
//! [`Cursor::is_eof`] to tell the two apart.

/// Position-tracking reader over a source string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte at the current position, `0x00` past the end.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Byte one past the current position, `0x00` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// The full character at the current position.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.source.get(self.pos as usize..)?.chars().next()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance one byte. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance past the whole UTF-8 character at the current position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a char is at most 4 bytes"
    )]
    pub(crate) fn advance_char(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8() as u32;
        }
    }

    /// Consume `byte` if it is next.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current byte.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance up to (not past) the next newline or EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        self.eat_while(|b| b != b'\n');
    }

    /// Move to the end of the source.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source length is checked against u32::MAX when the lexer is created"
    )]
    pub(crate) fn advance_to_end(&mut self) {
        self.pos = self.source.len() as u32;
    }

    /// Source text between two byte offsets.
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source.get(start as usize..end as usize).unwrap_or_default()
    }

    /// Source text from `start` to the current position.
    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}
