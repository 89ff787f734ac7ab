//! Stylesheet navigation: enclosing section, next/previous item selection
//! and section properties.

use std::ops::ControlFlow;

use tagwalk_scan::css::{CssToken, CssTokenKind};
use tagwalk_scan::Range;
use tracing::trace;

use crate::model::{step_through, CssProperty, CssSection, SelectionModel};
use crate::pool::{TokenRange, TokenRangePool, TokenStack};
use crate::range_list::push_range;
use crate::scanner::{CssScanner, StylesheetScanner};

/// Item accumulated by the previous-item scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PreviousItem {
    None,
    Selector(Range),
    PropertyNoValue(Range),
    PropertyWithValue {
        name: Range,
        value: Range,
        delimiter: Option<u32>,
    },
}

/// Stylesheet navigator over a [`StylesheetScanner`].
#[derive(Clone, Debug, Default)]
pub struct CssNavigator<S = CssScanner> {
    scanner: S,
}

impl CssNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: StylesheetScanner> CssNavigator<S> {
    pub fn with_scanner(scanner: S) -> Self {
        CssNavigator { scanner }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// The innermost section whose selector start and block end enclose
    /// `pos` (both inclusive).
    #[tracing::instrument(level = "trace", skip(self, code))]
    pub fn context_section(&self, code: &str, pos: u32) -> Option<CssSection> {
        let mut pool = TokenRangePool::new();
        let mut stack = TokenStack::new();
        let mut result = None;

        self.scanner.scan(code, &mut |token| {
            if token.start > pos && stack.is_empty() {
                return ControlFlow::Break(());
            }
            match token.kind {
                CssTokenKind::Selector => {
                    stack.push(pool.alloc(token.start, token.end, token.delimiter));
                }
                CssTokenKind::BlockEnd => {
                    let selector = stack.pop();
                    if let Some(sel) = selector {
                        if sel.start <= pos && pos <= token.end {
                            result = Some(CssSection {
                                start: sel.start,
                                end: token.end,
                                body_start: body_start(sel),
                                body_end: token.start,
                            });
                            return ControlFlow::Break(());
                        }
                    }
                    pool.release(selector);
                }
                CssTokenKind::PropertyName | CssTokenKind::PropertyValue => {}
            }
            ControlFlow::Continue(())
        });

        trace!(found = result.is_some(), "context section");
        result
    }

    /// Selection stops for the selector or property after (or before, when
    /// `is_prev`) `pos`.
    #[tracing::instrument(level = "trace", skip(self, code))]
    pub fn select_item(&self, code: &str, pos: u32, is_prev: bool) -> Option<SelectionModel> {
        let ranges = if is_prev {
            self.select_previous(code, pos)
        } else {
            self.select_next(code, pos)
        };
        trace!(stops = ranges.len(), "css selection");
        SelectionModel::spanning(ranges)
    }

    /// The range to select after `selection` when stepping through
    /// selectors and properties.
    pub fn step_selection(&self, code: &str, selection: Range, is_prev: bool) -> Option<Range> {
        step_through(selection, is_prev, |pos| self.select_item(code, pos, is_prev))
    }

    fn select_next(&self, code: &str, pos: u32) -> Vec<Range> {
        let mut ranges = Vec::new();
        let mut pending: Option<Range> = None;

        self.scanner.scan(code, &mut |token| {
            if token.start < pos {
                return ControlFlow::Continue(());
            }
            let range = Range::new(token.start, token.end);
            if token.kind == CssTokenKind::PropertyValue {
                self.push_property(code, &mut ranges, pending.take(), range, token.delimiter);
                return ControlFlow::Break(());
            }
            // A name followed by anything but its value stands alone.
            if let Some(name) = pending.take() {
                push_range(&mut ranges, name);
                return ControlFlow::Break(());
            }
            match token.kind {
                CssTokenKind::Selector => {
                    push_range(&mut ranges, range);
                    ControlFlow::Break(())
                }
                CssTokenKind::PropertyName => {
                    pending = Some(range);
                    ControlFlow::Continue(())
                }
                CssTokenKind::PropertyValue | CssTokenKind::BlockEnd => ControlFlow::Continue(()),
            }
        });

        if let Some(name) = pending {
            push_range(&mut ranges, name);
        }
        ranges
    }

    fn select_previous(&self, code: &str, pos: u32) -> Vec<Range> {
        let mut state = PreviousItem::None;

        self.scanner.scan(code, &mut |token: CssToken| {
            // A value completes a name seen before `pos`, so it is taken
            // even when it starts past `pos`.
            if token.start >= pos && token.kind != CssTokenKind::PropertyValue {
                return ControlFlow::Break(());
            }
            let range = Range::new(token.start, token.end);
            match token.kind {
                CssTokenKind::Selector => state = PreviousItem::Selector(range),
                CssTokenKind::PropertyName => state = PreviousItem::PropertyNoValue(range),
                CssTokenKind::PropertyValue => {
                    if let PreviousItem::PropertyNoValue(name)
                    | PreviousItem::PropertyWithValue { name, .. } = state
                    {
                        state = PreviousItem::PropertyWithValue {
                            name,
                            value: range,
                            delimiter: token.delimiter,
                        };
                    }
                }
                CssTokenKind::BlockEnd => {}
            }
            ControlFlow::Continue(())
        });

        let mut ranges = Vec::new();
        match state {
            PreviousItem::None => {}
            PreviousItem::Selector(range) | PreviousItem::PropertyNoValue(range) => {
                push_range(&mut ranges, range);
            }
            PreviousItem::PropertyWithValue {
                name,
                value,
                delimiter,
            } => self.push_property(code, &mut ranges, Some(name), value, delimiter),
        }
        ranges
    }

    /// Full property, full value, then value fragments.
    fn push_property(
        &self,
        code: &str,
        ranges: &mut Vec<Range>,
        name: Option<Range>,
        value: Range,
        delimiter: Option<u32>,
    ) {
        if let Some(name) = name {
            push_range(ranges, property_range(name, value, delimiter));
        }
        push_range(ranges, value);
        for fragment in self.scanner.split_value(slice(code, value)) {
            push_range(ranges, fragment.shift(value.start));
        }
    }

    /// Top-level declarations of `section`'s body, in document order.
    ///
    /// Declarations of nested rules are skipped.
    #[tracing::instrument(level = "trace", skip(self, code))]
    pub fn section_properties(&self, code: &str, section: &CssSection) -> Vec<CssProperty> {
        let body = section.body();
        let offset = body.start;
        let mut properties: Vec<CssProperty> = Vec::new();
        let mut depth = 0u32;

        self.scanner.scan(slice(code, body), &mut |token| {
            let range = Range::new(token.start, token.end).shift(offset);
            match token.kind {
                CssTokenKind::Selector => depth += 1,
                CssTokenKind::BlockEnd => depth = depth.saturating_sub(1),
                CssTokenKind::PropertyName if depth == 0 => properties.push(CssProperty {
                    name: range,
                    value: None,
                    value_tokens: Vec::new(),
                }),
                CssTokenKind::PropertyValue if depth == 0 => {
                    if let Some(property) = properties.last_mut().filter(|p| p.value.is_none()) {
                        property.value = Some(range);
                        property.value_tokens = self
                            .scanner
                            .split_value(slice(code, range))
                            .into_iter()
                            .map(|fragment| fragment.shift(range.start))
                            .collect();
                    }
                }
                CssTokenKind::PropertyName | CssTokenKind::PropertyValue => {}
            }
            ControlFlow::Continue(())
        });

        properties
    }
}

/// Offset just past a selector's `{`.
fn body_start(selector: TokenRange) -> u32 {
    selector
        .delimiter
        .map_or(selector.end, |delimiter| delimiter.saturating_add(1))
}

/// Name start through the colon, or through the value without one.
fn property_range(name: Range, value: Range, delimiter: Option<u32>) -> Range {
    let end = delimiter.map_or(value.end, |delimiter| delimiter.saturating_add(1));
    Range::new(name.start, end)
}

fn slice(code: &str, range: Range) -> &str {
    code.get(range.to_range()).unwrap_or("")
}
