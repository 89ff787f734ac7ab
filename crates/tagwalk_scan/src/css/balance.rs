//! Declaration and section ranges around a position.

use std::ops::ControlFlow;

use smallvec::SmallVec;

use crate::cursor::is_space;
use crate::{Cursor, Range};

use super::{scan, CssToken, CssTokenKind, INLINE_BLOCK_DEPTH};

/// Ranges enclosing `pos`, innermost first.
///
/// For the declaration containing `pos`: its value (when `pos` is inside it)
/// then the whole declaration including a trailing `;`. For every section
/// containing `pos`: its body between the braces (when `pos` is inside it),
/// then the whole section.
pub fn balanced_outward(code: &str, pos: u32) -> Vec<Range> {
    let mut walker = OutwardWalk {
        cur: Cursor::new(code),
        pos,
        selectors: SmallVec::new(),
        declaration: None,
        value: None,
        result: Vec::new(),
    };
    scan(code, |token| walker.visit(token));
    walker.flush_declaration();
    walker.result
}

/// The same ranges as [`balanced_outward`], outermost first.
pub fn balanced_inward(code: &str, pos: u32) -> Vec<Range> {
    let mut ranges = balanced_outward(code, pos);
    ranges.reverse();
    ranges
}

struct OutwardWalk<'a> {
    cur: Cursor<'a>,
    pos: u32,
    /// Open selectors: start and body start.
    selectors: SmallVec<[(u32, u32); INLINE_BLOCK_DEPTH]>,
    /// Declaration seen but not yet closed by the next event.
    declaration: Option<Range>,
    value: Option<Range>,
    result: Vec<Range>,
}

impl OutwardWalk<'_> {
    fn visit(&mut self, token: CssToken) -> ControlFlow<()> {
        if token.kind != CssTokenKind::PropertyValue {
            self.flush_declaration();
            // Nothing open and already past `pos`: nothing later can enclose it.
            if self.selectors.is_empty() && token.start > self.pos {
                return ControlFlow::Break(());
            }
        }

        match token.kind {
            CssTokenKind::Selector => {
                let body_start = token.delimiter.map_or(token.end, |d| d + 1);
                self.selectors.push((token.start, body_start));
            }
            CssTokenKind::PropertyName => {
                let end = token.delimiter.map_or(token.end, |d| d + 1);
                self.declaration = Some(Range::new(token.start, self.declaration_end(end)));
            }
            CssTokenKind::PropertyValue => {
                if let Some(declaration) = self.declaration {
                    self.declaration =
                        Some(Range::new(declaration.start, self.declaration_end(token.end)));
                    self.value = Some(Range::new(token.start, token.end));
                }
            }
            CssTokenKind::BlockEnd => {
                if let Some((start, body_start)) = self.selectors.pop() {
                    if start <= self.pos && self.pos <= token.end {
                        if body_start <= self.pos && self.pos <= token.start {
                            self.push(Range::new(body_start, token.start));
                        }
                        self.push(Range::new(start, token.end));
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// End of a declaration whose text ends at `end`: past a following `;`.
    fn declaration_end(&self, end: u32) -> u32 {
        let mut ahead = self.cur;
        ahead.set_pos(end);
        ahead.eat_while(is_space);
        if ahead.current() == b';' {
            ahead.pos() + 1
        } else {
            end
        }
    }

    fn flush_declaration(&mut self) {
        let value = self.value.take();
        let Some(declaration) = self.declaration.take() else {
            return;
        };
        if declaration.start <= self.pos && self.pos <= declaration.end {
            if let Some(value) = value {
                if value.start <= self.pos && self.pos <= value.end {
                    self.push(value);
                }
            }
            self.push(declaration);
        }
    }

    fn push(&mut self, range: Range) {
        if !range.is_empty() && self.result.last() != Some(&range) {
            self.result.push(range);
        }
    }
}
