//! Navigator results.

use tagwalk_scan::html::{AttributeToken, ElementKind};
use tagwalk_scan::Range;

/// Successive selection stops for one semantic item, coarsest first.
///
/// For a tag: the tag name, then per attribute its full span, its unquoted
/// value and (for `class`) each class name. For a CSS property: the full
/// property, the value, then each value fragment. `ranges` is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionModel {
    /// Start of the item the stops belong to.
    pub start: u32,
    /// End of the item the stops belong to.
    pub end: u32,
    pub ranges: Vec<Range>,
}

impl SelectionModel {
    /// Model for an item spanning `start..end`; `None` without stops.
    pub(crate) fn new(start: u32, end: u32, ranges: Vec<Range>) -> Option<Self> {
        if ranges.is_empty() {
            return None;
        }
        Some(SelectionModel { start, end, ranges })
    }

    /// Model whose item span is the hull of its stops.
    pub(crate) fn spanning(ranges: Vec<Range>) -> Option<Self> {
        let start = ranges.first()?.start;
        let end = ranges.iter().map(|r| r.end).max()?;
        Self::new(start, end, ranges)
    }

    /// The item span.
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    /// Check if `pos` is strictly inside the item.
    pub fn contains(&self, pos: u32) -> bool {
        self.start < pos && pos < self.end
    }

    /// Position to search from once every stop of this model is used up.
    pub fn continuation(&self, reverse: bool) -> u32 {
        if reverse {
            self.start
        } else {
            self.end
        }
    }

    /// The stop to select after `selection`.
    ///
    /// When `selection` is one of the stops, returns the following stop
    /// (the preceding one when `reverse`), or `None` if it is the last.
    /// Otherwise returns the first stop that contains the selection or lies
    /// ahead of it in the walking direction.
    pub fn find_region(&self, selection: Range, reverse: bool) -> Option<Range> {
        if reverse {
            find_in(self.ranges.iter().rev(), selection, reverse)
        } else {
            find_in(self.ranges.iter(), selection, reverse)
        }
    }
}

/// Step from `selection` through the model found at its start, then through
/// the neighbouring model once those stops are used up.
pub(crate) fn step_through(
    selection: Range,
    reverse: bool,
    select: impl Fn(u32) -> Option<SelectionModel>,
) -> Option<Range> {
    let model = select(selection.start)?;
    if let Some(region) = model.find_region(selection, reverse) {
        return Some(region);
    }
    select(model.continuation(reverse))?.find_region(selection, reverse)
}

fn find_in<'r>(
    ranges: impl Iterator<Item = &'r Range>,
    selection: Range,
    reverse: bool,
) -> Option<Range> {
    let mut candidate = None;
    let mut take_next = false;
    for &range in ranges {
        if take_next {
            return Some(range);
        }
        if range == selection {
            take_next = true;
        } else if candidate.is_none()
            && (range.contains_range(selection)
                || (reverse && range.start <= selection.start)
                || (!reverse && range.start >= selection.start))
        {
            candidate = Some(range);
        }
    }
    if take_next {
        None
    } else {
        candidate
    }
}

/// A tag strictly enclosing a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextTag<'a> {
    pub name: &'a str,
    pub kind: ElementKind,
    pub start: u32,
    pub end: u32,
    /// Attributes in document coordinates; `None` for closing tags.
    pub attributes: Option<Vec<AttributeToken<'a>>>,
}

/// A CSS selector together with its block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CssSection {
    /// Selector start.
    pub start: u32,
    /// Just past the closing `}`.
    pub end: u32,
    /// Just past the opening `{`.
    pub body_start: u32,
    /// The closing `}`.
    pub body_end: u32,
}

impl CssSection {
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    pub fn body(&self) -> Range {
        Range::new(self.body_start, self.body_end)
    }
}

/// A top-level declaration of a CSS section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssProperty {
    pub name: Range,
    /// `None` for a declaration without a value.
    pub value: Option<Range>,
    /// Value fragments in document coordinates.
    pub value_tokens: Vec<Range>,
}

#[cfg(test)]
mod tests;
