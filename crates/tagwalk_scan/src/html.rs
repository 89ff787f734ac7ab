//! Markup tag scanner.
//!
//! Reports opening, closing and self-closing tags in document order.
//! Comments, CDATA sections, processing instructions and doctypes are
//! skipped, as is the content of special elements such as `<script>`.
//!
//! The scanner does not build a tree and does not match tags; it is a flat
//! event stream. See [`balanced_outward`] / [`balanced_inward`] for pairing.

use std::ops::ControlFlow;

use crate::cursor::is_space;
use crate::{Cursor, ScanOptions};

mod attributes;
mod balance;

pub use attributes::{attributes, AttributeToken};
pub use balance::{balanced_inward, balanced_outward, BalancedTag};

/// Kind of a scanned tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<name ...>`
    Open,
    /// `</name>`
    Close,
    /// `<name ... />`
    SelfClose,
}

impl ElementKind {
    /// Returns `true` for tags that may carry attributes.
    #[inline]
    pub fn is_open_or_self_close(self) -> bool {
        matches!(self, ElementKind::Open | ElementKind::SelfClose)
    }
}

/// One structural markup event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HtmlToken<'a> {
    /// Tag name as written in the source.
    pub name: &'a str,
    pub kind: ElementKind,
    /// Offset of `<`.
    pub start: u32,
    /// Offset just past `>`.
    pub end: u32,
}

/// Outcome of trying to read a tag at a `<`.
enum TagScan<'a> {
    Tag(HtmlToken<'a>),
    /// The `<` does not start a tag; it is plain text.
    Text,
    /// A tag started but the document ended before its `>`.
    Unterminated,
}

/// Scan `code` and call `visitor` for every tag.
///
/// The scan stops as soon as the visitor returns [`ControlFlow::Break`].
pub fn scan<'a>(
    code: &'a str,
    options: &ScanOptions,
    mut visitor: impl FnMut(HtmlToken<'a>) -> ControlFlow<()>,
) {
    let mut cur = Cursor::new(code);
    while cur.eat_until(b'<') {
        let start = cur.pos();
        if cur.starts_with(b"<!--") {
            cur.eat_past_seq(b"-->");
            continue;
        }
        if cur.starts_with(b"<![CDATA[") {
            cur.eat_past_seq(b"]]>");
            continue;
        }
        if cur.starts_with(b"<?") {
            cur.eat_past_seq(b"?>");
            continue;
        }
        if cur.peek() == b'!' {
            cur.eat_past_seq(b">");
            continue;
        }

        match tag(&mut cur) {
            TagScan::Tag(token) => {
                if visitor(token).is_break() {
                    return;
                }
                if token.kind == ElementKind::Open {
                    skip_special_content(&mut cur, token, options);
                }
            }
            TagScan::Text => cur.set_pos(start + 1),
            TagScan::Unterminated => return,
        }
    }
}

/// Tag name start: ASCII letter, `_` or `:`.
#[inline]
fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b':'
}

/// Tag name continuation.
#[inline]
pub(crate) fn is_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':' | b'.')
}

/// Read a tag at the current `<`.
fn tag<'a>(cur: &mut Cursor<'a>) -> TagScan<'a> {
    let start = cur.pos();
    cur.advance();
    let closing = cur.current() == b'/';
    if closing {
        cur.advance();
    }
    if !is_name_start(cur.current()) {
        return TagScan::Text;
    }
    let name_start = cur.pos();
    cur.eat_while(is_name_char);
    let name = cur.slice_from(name_start);

    if closing {
        cur.eat_whitespace();
        if cur.current() != b'>' {
            return if cur.is_eof() {
                TagScan::Unterminated
            } else {
                TagScan::Text
            };
        }
        cur.advance();
        return TagScan::Tag(HtmlToken {
            name,
            kind: ElementKind::Close,
            start,
            end: cur.pos(),
        });
    }

    // The name must be followed by a delimiter, not arbitrary text (`<a"b>`).
    let next = cur.current();
    if !(is_space(next) || next == b'>' || next == b'/' || cur.is_eof()) {
        return TagScan::Text;
    }

    loop {
        match cur.current() {
            b'>' => {
                cur.advance();
                return TagScan::Tag(HtmlToken {
                    name,
                    kind: ElementKind::Open,
                    start,
                    end: cur.pos(),
                });
            }
            b'/' if cur.peek() == b'>' => {
                cur.advance_n(2);
                return TagScan::Tag(HtmlToken {
                    name,
                    kind: ElementKind::SelfClose,
                    start,
                    end: cur.pos(),
                });
            }
            b'"' | b'\'' => {
                let quote_start = cur.pos();
                if !cur.eat_quoted() {
                    // Unterminated quote: the tag ends at the next `>`.
                    cur.set_pos(quote_start);
                    if !cur.eat_until(b'>') {
                        return TagScan::Unterminated;
                    }
                }
            }
            b'{' => {
                if !cur.eat_braces() {
                    return TagScan::Unterminated;
                }
            }
            b'<' => return TagScan::Text,
            _ if cur.is_eof() => return TagScan::Unterminated,
            _ => cur.advance_char(),
        }
    }
}

/// After an opening tag, jump to the closing tag of a special element.
#[allow(
    clippy::cast_possible_truncation,
    reason = "tag names are bounded by the u32 document length"
)]
fn skip_special_content(cur: &mut Cursor<'_>, token: HtmlToken<'_>, options: &ScanOptions) {
    let Some(special) = options.special_tag(token.name) else {
        return;
    };
    if special.types.is_some() {
        let src = cur.slice(token.start, token.end);
        let type_value = attributes(src, token.name)
            .into_iter()
            .find(|attr| attr.name.eq_ignore_ascii_case("type"))
            .and_then(|attr| attr.value.map(unquote));
        if !special.skips_type(type_value) {
            return;
        }
    }

    let close = format!("</{}", token.name);
    while cur.eat_until(b'<') {
        if cur.starts_with_ignore_ascii_case(close.as_bytes()) {
            let mut ahead = *cur;
            ahead.advance_n(close.len() as u32);
            if !is_name_char(ahead.current()) {
                return;
            }
        }
        cur.advance();
    }
}

/// Strip one matching pair of quotes from an attribute value.
pub(crate) fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    match bytes.first() {
        Some(&q @ (b'"' | b'\'')) => {
            let inner = &value[1..];
            inner.strip_suffix(q as char).unwrap_or(inner)
        }
        _ => value,
    }
}
