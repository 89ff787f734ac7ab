//! Stylesheet structure scanner.
//!
//! Reports selectors, property names, property values and block ends in
//! document order. Comments are skipped; strings, parenthesised groups and
//! escapes are opaque, so `;`, `{` or `:` inside `url(...)` or `"..."` never
//! act as structure.
//!
//! # Event shapes
//!
//! | kind | span | delimiter |
//! |------|------|-----------|
//! | `Selector` | trimmed prelude text before `{` | the `{` |
//! | `PropertyName` | trimmed text before `:` | the `:`, absent when the declaration has none |
//! | `PropertyValue` | trimmed text after `:` | the same `:` |
//! | `BlockEnd` | the `}` | absent |

use std::ops::ControlFlow;

use smallvec::SmallVec;

use crate::cursor::is_space;
use crate::Cursor;

mod balance;
mod split_value;

pub use balance::{balanced_inward, balanced_outward};
pub use split_value::split_value;

/// Nesting depth kept inline before the block stack spills to the heap.
const INLINE_BLOCK_DEPTH: usize = 16;

/// Kind of a stylesheet event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CssTokenKind {
    Selector,
    PropertyName,
    PropertyValue,
    BlockEnd,
}

/// One structural stylesheet event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CssToken {
    pub kind: CssTokenKind,
    pub start: u32,
    pub end: u32,
    /// Separator offset; see the module table.
    pub delimiter: Option<u32>,
}

impl CssToken {
    fn new(kind: CssTokenKind, start: u32, end: u32, delimiter: Option<u32>) -> Self {
        CssToken {
            kind,
            start,
            end,
            delimiter,
        }
    }
}

/// Scan `code` and call `visitor` for every structural event.
///
/// The scan stops as soon as the visitor returns [`ControlFlow::Break`].
pub fn scan(code: &str, mut visitor: impl FnMut(CssToken) -> ControlFlow<()>) {
    let mut scanner = StyleScan::new(code);
    // Break only signals that the visitor is done.
    let _ = scanner.run(&mut visitor);
}

/// Pending text of the current prelude or declaration.
#[derive(Default)]
struct PendingToken {
    /// First byte of the token.
    start: Option<u32>,
    /// End of the last non-whitespace byte.
    end: u32,
    /// First top-level `:` inside the token.
    colon: Option<u32>,
    /// Token end at the time the colon was seen.
    name_end: u32,
    /// First non-whitespace byte after the colon.
    value_start: Option<u32>,
}

struct StyleScan<'a> {
    cur: Cursor<'a>,
    token: PendingToken,
    /// Parenthesis depth inside the current token.
    parens: u32,
    /// One entry per open block: whether it was opened by a selector.
    blocks: SmallVec<[bool; INLINE_BLOCK_DEPTH]>,
}

impl<'a> StyleScan<'a> {
    fn new(code: &'a str) -> Self {
        StyleScan {
            cur: Cursor::new(code),
            token: PendingToken::default(),
            parens: 0,
            blocks: SmallVec::new(),
        }
    }

    fn run(&mut self, visitor: &mut impl FnMut(CssToken) -> ControlFlow<()>) -> ControlFlow<()> {
        while !self.cur.is_eof() {
            let pos = self.cur.pos();
            match self.cur.current() {
                b'/' if self.cur.peek() == b'*' => {
                    self.cur.advance_n(2);
                    self.cur.eat_past_seq(b"*/");
                }
                b'"' | b'\'' => {
                    self.mark(pos);
                    self.string();
                    self.token.end = self.cur.pos();
                }
                b'\\' => {
                    self.mark(pos);
                    self.cur.advance();
                    self.cur.advance_char();
                    self.token.end = self.cur.pos();
                }
                b'(' => {
                    self.parens += 1;
                    self.token_byte(pos);
                }
                b')' => {
                    self.parens = self.parens.saturating_sub(1);
                    self.token_byte(pos);
                }
                b if is_space(b) => self.cur.advance(),
                _ if self.parens > 0 => self.token_byte(pos),
                b'{' => {
                    self.cur.advance();
                    match self.token.start {
                        Some(start) => {
                            let end = self.token.end;
                            self.reset();
                            self.blocks.push(true);
                            visitor(CssToken::new(CssTokenKind::Selector, start, end, Some(pos)))?;
                        }
                        None => self.blocks.push(false),
                    }
                }
                b'}' => {
                    self.flush_declaration(visitor)?;
                    self.cur.advance();
                    if self.blocks.pop() != Some(false) {
                        visitor(CssToken::new(CssTokenKind::BlockEnd, pos, pos + 1, None))?;
                    }
                }
                b';' => {
                    self.flush_declaration(visitor)?;
                    self.cur.advance();
                }
                b':' if self.token.start.is_some() && self.token.colon.is_none() => {
                    self.token.colon = Some(pos);
                    self.token.name_end = self.token.end;
                    self.cur.advance();
                }
                _ => self.token_byte(pos),
            }
        }
        self.flush_declaration(visitor)
    }

    /// Record that a token byte starts at `pos`.
    fn mark(&mut self, pos: u32) {
        if self.token.start.is_none() {
            self.token.start = Some(pos);
        }
        if self.token.colon.is_some() && self.token.value_start.is_none() {
            self.token.value_start = Some(pos);
        }
    }

    /// Consume one token character at `pos`.
    fn token_byte(&mut self, pos: u32) {
        self.mark(pos);
        self.cur.advance_char();
        self.token.end = self.cur.pos();
    }

    /// Skip a quoted string, honouring backslash escapes. An unterminated
    /// string runs to the end of the line.
    fn string(&mut self) {
        let quote = self.cur.current();
        self.cur.advance();
        while !self.cur.is_eof() {
            match self.cur.current() {
                b'\\' => {
                    self.cur.advance();
                    self.cur.advance_char();
                }
                b'\n' => return,
                b if b == quote => {
                    self.cur.advance();
                    return;
                }
                _ => self.cur.advance_char(),
            }
        }
    }

    fn reset(&mut self) {
        self.token = PendingToken::default();
        self.parens = 0;
    }

    /// Emit the pending declaration, if any.
    fn flush_declaration(
        &mut self,
        visitor: &mut impl FnMut(CssToken) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let token = std::mem::take(&mut self.token);
        self.parens = 0;
        let Some(start) = token.start else {
            return ControlFlow::Continue(());
        };

        match token.colon {
            Some(colon) => {
                visitor(CssToken::new(
                    CssTokenKind::PropertyName,
                    start,
                    token.name_end,
                    Some(colon),
                ))?;
                if let Some(value_start) = token.value_start {
                    visitor(CssToken::new(
                        CssTokenKind::PropertyValue,
                        value_start,
                        token.end,
                        Some(colon),
                    ))?;
                }
                ControlFlow::Continue(())
            }
            None if self.cur.slice(start, start + 1) == "@" => ControlFlow::Continue(()),
            None => visitor(CssToken::new(
                CssTokenKind::PropertyName,
                start,
                token.end,
                None,
            )),
        }
    }
}
