//! Byte cursor over a borrowed document.
//!
//! The cursor advances through the text byte-by-byte. Reads past the end
//! return `0x00`, so byte-class predicates terminate naturally at EOF. Unlike
//! a sentinel-terminated buffer, the document is never copied: navigation
//! runs on every caret move and most scans stop long before the end.
//!
//! All structural bytes the scanners look for are ASCII, and ASCII bytes never
//! occur inside a multi-byte UTF-8 sequence, so every position the scanners
//! stop at is a character boundary.

use memchr::memmem;

/// Cheap, copyable cursor over a document's bytes.
///
/// The cursor is [`Copy`], enabling state snapshots for lookahead: copy it,
/// probe forward, and assign back only if the probe succeeded.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Document text, truncated to `len` bytes.
    source: &'a str,
    /// Current read position (byte index).
    pos: u32,
    /// Scannable length of `source`.
    len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Create a cursor at `pos`, clamped to the document length.
    pub fn at(source: &'a str, pos: u32) -> Self {
        let len = crate::source_len(source);
        Self {
            source,
            pos: pos.min(len),
            len,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos >= self.len {
            return 0;
        }
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.len);
    }

    /// Returns `true` if the cursor has reached the end of the document.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Current byte offset in the document.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Move to `pos`, clamped to the document length.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.len);
    }

    /// Scannable length of the document.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the document is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extract a document substring.
    ///
    /// Out-of-range or non-boundary requests yield an empty string rather
    /// than panicking; offsets produced by the scanners are always valid.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        let end = end.min(self.len);
        self.source
            .get(start.min(end) as usize..end as usize)
            .unwrap_or("")
    }

    /// Extract a document substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Remaining bytes from the current position.
    fn rest(&self) -> &'a [u8] {
        self.source
            .as_bytes()
            .get(self.pos as usize..self.len as usize)
            .unwrap_or(&[])
    }

    /// Check if the text at the current position starts with `needle`.
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.rest().starts_with(needle)
    }

    /// Check if the text at the current position starts with `needle`,
    /// comparing ASCII letters case-insensitively.
    pub fn starts_with_ignore_ascii_case(&self, needle: &[u8]) -> bool {
        let rest = self.rest();
        rest.len() >= needle.len() && rest[..needle.len()].eq_ignore_ascii_case(needle)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, otherwise the loop is only ended by EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past markup whitespace (space, tab, LF, CR, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns `true` if the byte was found; the cursor is positioned on it.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> bool {
        if let Some(offset) = memchr::memchr(byte, self.rest()) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.len;
            false
        }
    }

    /// Advance until `needle` is found or EOF is reached.
    ///
    /// Returns `true` if found; the cursor is positioned at the start of the
    /// match.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < len which fits in u32"
    )]
    pub fn eat_until_seq(&mut self, needle: &[u8]) -> bool {
        if let Some(offset) = memmem::find(self.rest(), needle) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.len;
            false
        }
    }

    /// Advance past the next occurrence of `needle`, or to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "needles are short ASCII literals"
    )]
    pub fn eat_past_seq(&mut self, needle: &[u8]) {
        if self.eat_until_seq(needle) {
            self.advance_n(needle.len() as u32);
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Skip a quoted string starting at the current quote byte.
    ///
    /// Returns `true` if the matching closing quote was found, in which case
    /// the cursor sits just past it. Otherwise the cursor is left at EOF.
    pub fn eat_quoted(&mut self) -> bool {
        let quote = self.current();
        self.advance();
        if self.eat_until(quote) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip a `{...}` group starting at the current `{`, honouring nesting
    /// and quoted strings inside it.
    ///
    /// Returns `true` if the group was closed; the cursor sits past the `}`.
    pub fn eat_braces(&mut self) -> bool {
        let mut depth = 0u32;
        while !self.is_eof() {
            match self.current() {
                b'{' => {
                    depth += 1;
                    self.advance();
                }
                b'}' => {
                    self.advance();
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return true;
                    }
                }
                b'"' | b'\'' | b'`' => {
                    if !self.eat_quoted() {
                        return false;
                    }
                }
                _ => self.advance_char(),
            }
        }
        false
    }
}

/// Markup whitespace: space, tab, LF, CR and form feed.
#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}
