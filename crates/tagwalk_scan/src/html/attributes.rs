//! Attribute parser for a single tag's source text.

use crate::cursor::is_space;
use crate::{Cursor, Range};

use super::is_name_char;

/// One attribute of a tag.
///
/// Offsets are relative to the text passed to [`attributes`] until shifted
/// with [`AttributeToken::shifted`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttributeToken<'a> {
    pub name: &'a str,
    pub name_start: u32,
    pub name_end: u32,
    /// Raw value including quotes or braces. `None` for boolean attributes.
    pub value: Option<&'a str>,
    /// Value offsets; equal to `name_end` for boolean attributes.
    pub value_start: u32,
    pub value_end: u32,
}

impl AttributeToken<'_> {
    /// Translate all offsets by `offset` bytes.
    #[must_use]
    pub fn shifted(self, offset: u32) -> Self {
        AttributeToken {
            name_start: self.name_start.saturating_add(offset),
            name_end: self.name_end.saturating_add(offset),
            value_start: self.value_start.saturating_add(offset),
            value_end: self.value_end.saturating_add(offset),
            ..self
        }
    }

    /// Name range.
    pub fn name_range(&self) -> Range {
        Range::new(self.name_start, self.name_end)
    }

    /// Raw value range, if the attribute has a value.
    pub fn value_range(&self) -> Option<Range> {
        self.value
            .map(|_| Range::new(self.value_start, self.value_end))
    }

    /// Whole attribute: name through value end, or the name alone.
    pub fn full_range(&self) -> Range {
        match self.value {
            Some(_) => Range::new(self.name_start, self.value_end),
            None => self.name_range(),
        }
    }
}

/// Parse the attributes of one tag.
///
/// `tag_src` is the tag's own text (`<img src="a.png">`); `name` its tag
/// name, which is skipped before attribute parsing begins. Attributes are
/// returned in source order.
pub fn attributes<'a>(tag_src: &'a str, name: &str) -> Vec<AttributeToken<'a>> {
    let mut cur = Cursor::new(tag_src);
    let mut result = Vec::new();

    if cur.current() == b'<' {
        cur.advance();
    }
    if cur.starts_with(name.as_bytes()) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "name is a prefix of tag_src whose length fits in u32"
        )]
        let name_len = name.len() as u32;
        cur.advance_n(name_len);
    } else {
        cur.eat_while(is_name_char);
    }

    loop {
        cur.eat_whitespace();
        match cur.current() {
            _ if cur.is_eof() => break,
            b'>' => break,
            b'/' => {
                cur.advance();
                continue;
            }
            _ => {}
        }

        let name_start = cur.pos();
        match cur.current() {
            b'{' => {
                // JSX spread or expression in name position.
                cur.eat_braces();
            }
            b'"' | b'\'' => {
                cur.eat_quoted();
            }
            _ => cur.eat_while(is_attribute_name_char),
        }
        let name_end = cur.pos();
        if name_end == name_start {
            cur.advance_char();
            continue;
        }

        let mut attr = AttributeToken {
            name: cur.slice(name_start, name_end),
            name_start,
            name_end,
            value: None,
            value_start: name_end,
            value_end: name_end,
        };

        let mut ahead = cur;
        ahead.eat_whitespace();
        if ahead.current() == b'=' {
            ahead.advance();
            ahead.eat_whitespace();
            cur = ahead;
            let value_start = cur.pos();
            let value_end = attribute_value(&mut cur);
            attr.value = Some(cur.slice(value_start, value_end));
            attr.value_start = value_start;
            attr.value_end = value_end;
        }

        result.push(attr);
    }

    result
}

fn is_attribute_name_char(byte: u8) -> bool {
    byte != 0 && !is_space(byte) && !matches!(byte, b'=' | b'>' | b'/' | b'"' | b'\'')
}

/// Read an attribute value at the cursor and return its end offset.
///
/// An unterminated quoted value runs to the end of the tag, excluding the
/// tag's closing `>` or `/>`.
fn attribute_value(cur: &mut Cursor<'_>) -> u32 {
    match cur.current() {
        b'"' | b'\'' => {
            if cur.eat_quoted() {
                return cur.pos();
            }
            let mut end = cur.len();
            let bytes = cur.slice(0, end).as_bytes();
            if bytes.last() == Some(&b'>') {
                end -= 1;
                if bytes.len() >= 2 && bytes[bytes.len() - 2] == b'/' {
                    end -= 1;
                }
            }
            end
        }
        b'{' => {
            cur.eat_braces();
            cur.pos()
        }
        _ => {
            loop {
                let b = cur.current();
                if cur.is_eof() || is_space(b) || b == b'>' || (b == b'/' && cur.peek() == b'>') {
                    break;
                }
                cur.advance_char();
            }
            cur.pos()
        }
    }
}
