//! Property value fragments.

use crate::cursor::is_space;
use crate::{Cursor, Range};

/// Split a property value into top-level fragments.
///
/// Fragments are separated by whitespace and commas. Quoted strings and
/// parenthesised groups (`url(a b)`, `rgba(0, 0, 0, .5)`) stay whole.
/// Offsets are relative to `value`.
pub fn split_value(value: &str) -> Vec<Range> {
    let mut cur = Cursor::new(value);
    let mut fragments = Vec::new();
    let mut start: Option<u32> = None;
    let mut depth = 0u32;

    while !cur.is_eof() {
        let pos = cur.pos();
        match cur.current() {
            b if depth == 0 && (is_space(b) || b == b',') => {
                if let Some(s) = start.take() {
                    fragments.push(Range::new(s, pos));
                }
                cur.advance();
                continue;
            }
            b'"' | b'\'' => {
                start.get_or_insert(pos);
                cur.eat_quoted();
                continue;
            }
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        start.get_or_insert(pos);
        cur.advance_char();
    }

    if let Some(s) = start {
        fragments.push(Range::new(s, cur.pos()));
    }
    fragments
}
