//! Markup navigation: the tag around a position and next/previous item
//! selection.
//!
//! Every operation is one forward scan that stops as soon as no later tag
//! can change the answer. Attribute ranges are computed over the tag's own
//! text and shifted back into document coordinates before they are emitted.

use std::ops::ControlFlow;

use tagwalk_scan::html::HtmlToken;
use tagwalk_scan::{source_len, Range};
use tracing::trace;

use crate::model::{step_through, ContextTag, SelectionModel};
use crate::range_list::push_range;
use crate::scanner::{HtmlScanner, MarkupScanner};

/// Markup navigator over a [`MarkupScanner`].
#[derive(Clone, Debug, Default)]
pub struct HtmlNavigator<S = HtmlScanner> {
    scanner: S,
}

impl HtmlNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: MarkupScanner> HtmlNavigator<S> {
    pub fn with_scanner(scanner: S) -> Self {
        HtmlNavigator { scanner }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// The tag whose span strictly encloses `pos`, with its attributes when
    /// it is an opening or self-closing tag.
    #[tracing::instrument(level = "trace", skip(self, code))]
    pub fn context_tag<'a>(&self, code: &'a str, pos: u32) -> Option<ContextTag<'a>> {
        let mut found = None;
        self.scanner.scan(code, &mut |token| {
            if token.start < pos && pos < token.end {
                found = Some(token);
                return ControlFlow::Break(());
            }
            // Tags arrive in order: once one ends past `pos` without
            // enclosing it, none can.
            if token.end > pos {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        let token = found?;
        trace!(name = token.name, start = token.start, end = token.end, "context tag");
        let attributes = token.kind.is_open_or_self_close().then(|| {
            self.scanner
                .attributes(slice(code, token.start, token.end), token.name)
                .into_iter()
                .map(|attr| attr.shifted(token.start))
                .collect()
        });
        Some(ContextTag {
            name: token.name,
            kind: token.kind,
            start: token.start,
            end: token.end,
            attributes,
        })
    }

    /// Selection stops for the tag after (or before, when `is_prev`) `pos`.
    #[tracing::instrument(level = "trace", skip(self, code))]
    pub fn select_item(&self, code: &str, pos: u32, is_prev: bool) -> Option<SelectionModel> {
        let target = if is_prev {
            self.previous_tag(code, pos)
        } else {
            self.next_tag(code, pos)
        };
        let Some(tag) = target else {
            trace!("no tag to select");
            return None;
        };
        self.tag_selection_model(code, tag.name, tag.start, tag.end)
    }

    /// The range to select after `selection` when stepping through tags.
    pub fn step_selection(&self, code: &str, selection: Range, is_prev: bool) -> Option<Range> {
        step_through(selection, is_prev, |pos| self.select_item(code, pos, is_prev))
    }

    /// First opening or self-closing tag ending after `pos`.
    fn next_tag<'a>(&self, code: &'a str, pos: u32) -> Option<HtmlToken<'a>> {
        let mut found = None;
        self.scanner.scan(code, &mut |token| {
            if token.kind.is_open_or_self_close() && token.end > pos {
                found = Some(token);
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });
        found
    }

    /// Last opening or self-closing tag starting before `pos`.
    fn previous_tag<'a>(&self, code: &'a str, pos: u32) -> Option<HtmlToken<'a>> {
        let mut last = None;
        self.scanner.scan(code, &mut |token| {
            if token.start >= pos {
                return ControlFlow::Break(());
            }
            if token.kind.is_open_or_self_close() {
                last = Some(token);
            }
            ControlFlow::Continue(())
        });
        last
    }

    /// Selection stops for the tag `name` spanning `start..end`.
    ///
    /// The tag name, then for each attribute: the whole attribute, its value
    /// without quotes or braces, and for `class` each class name.
    pub fn tag_selection_model(
        &self,
        code: &str,
        name: &str,
        start: u32,
        end: u32,
    ) -> Option<SelectionModel> {
        let mut ranges = Vec::new();
        let name_start = start.saturating_add(1);
        let name_end = name_start.saturating_add(source_len(name)).min(end);
        push_range(&mut ranges, Range::new(name_start, name_end));

        for attr in self.scanner.attributes(slice(code, start, end), name) {
            let attr = attr.shifted(start);
            push_range(&mut ranges, attr.full_range());

            let Some(raw) = attr.value.filter(|value| !value.is_empty()) else {
                continue;
            };
            let value = value_range(raw, attr.value_start, attr.value_end);
            push_range(&mut ranges, value);

            if attr.name == "class" {
                for class in token_list(slice(code, value.start, value.end)) {
                    push_range(&mut ranges, class.shift(value.start));
                }
            }
        }

        SelectionModel::new(start, end, ranges)
    }
}

/// Document text for `start..end`, empty when out of bounds.
fn slice(code: &str, start: u32, end: u32) -> &str {
    code.get(start as usize..end as usize).unwrap_or("")
}

/// Value span without its surrounding quotes or braces.
///
/// A missing closing quote leaves the end untouched.
fn value_range(raw: &str, start: u32, end: u32) -> Range {
    let bytes = raw.as_bytes();
    match bytes {
        [quote @ (b'"' | b'\''), rest @ ..] => {
            let closed = rest.last() == Some(quote);
            let end = if closed { end.saturating_sub(1) } else { end };
            Range::new(start.saturating_add(1), end)
        }
        [b'{', .., b'}'] => Range::new(start.saturating_add(1), end.saturating_sub(1)),
        _ => Range::new(start, end),
    }
}

/// Separators inside a `class` value: space, tab, no-break space, LF, CR.
fn is_list_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{a0}' | '\n' | '\r')
}

/// Ranges of the non-blank runs in `text`.
fn token_list(text: &str) -> Vec<Range> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (index, ch) in text.char_indices() {
        let offset = u32::try_from(index).unwrap_or(u32::MAX);
        if is_list_space(ch) {
            if let Some(token_start) = start.take() {
                tokens.push(Range::new(token_start, offset));
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }
    if let Some(token_start) = start {
        tokens.push(Range::new(token_start, source_len(text)));
    }
    tokens
}

#[cfg(test)]
mod tests;
