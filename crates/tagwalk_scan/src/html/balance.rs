//! Tag pairing around a position.
//!
//! Both directions run one forward scan with a stack of open elements.
//! Closing tags pop up to the nearest open element with the same name, so
//! unclosed elements in between (`<li>` without `</li>`) are dropped instead
//! of breaking the pairing of their ancestors.

use std::ops::ControlFlow;

use crate::{Range, ScanOptions};

use super::{scan, ElementKind};

/// An element found by balancing: its opening tag and, unless it is
/// self-closing, its closing tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalancedTag<'a> {
    pub name: &'a str,
    pub open: Range,
    pub close: Option<Range>,
}

impl BalancedTag<'_> {
    /// The whole element, from `<` of the opening tag to `>` of the closing one.
    pub fn outer(&self) -> Range {
        match self.close {
            Some(close) => Range::new(self.open.start, close.end),
            None => self.open,
        }
    }

    /// The element content between its tags, if it has a closing tag.
    pub fn inner(&self) -> Option<Range> {
        self.close.map(|close| Range::new(self.open.end, close.start))
    }
}

/// Kind as the balancer sees it: void elements close themselves in HTML mode.
fn effective_kind(kind: ElementKind, name: &str, options: &ScanOptions) -> ElementKind {
    if kind == ElementKind::Open && options.is_empty_element(name) {
        ElementKind::SelfClose
    } else {
        kind
    }
}

/// Elements strictly enclosing `pos`, innermost first.
pub fn balanced_outward<'a>(code: &'a str, pos: u32, options: &ScanOptions) -> Vec<BalancedTag<'a>> {
    let mut stack: Vec<(&'a str, Range)> = Vec::new();
    let mut result = Vec::new();

    scan(code, options, |token| {
        let range = Range::new(token.start, token.end);
        match effective_kind(token.kind, token.name, options) {
            ElementKind::Open => stack.push((token.name, range)),
            ElementKind::SelfClose => {
                if token.start < pos && pos < token.end {
                    result.push(BalancedTag {
                        name: token.name,
                        open: range,
                        close: None,
                    });
                }
            }
            ElementKind::Close => {
                let matched = stack
                    .iter()
                    .rposition(|(name, _)| options.names_match(name, token.name));
                if let Some(index) = matched {
                    let (name, open) = stack[index];
                    stack.truncate(index);
                    if open.start < pos && pos < token.end {
                        result.push(BalancedTag {
                            name,
                            open,
                            close: Some(range),
                        });
                    }
                }
            }
        }
        ControlFlow::Continue(())
    });

    // Enclosing elements complete innermost first.
    result
}

/// Element under construction for inward balancing.
struct InwardTag<'a> {
    name: &'a str,
    open: Range,
    close: Option<Range>,
    /// Index of the first completed child element.
    first_child: Option<usize>,
}

/// The innermost element strictly enclosing `pos`, then its chain of first
/// children (outermost first, innermost last).
pub fn balanced_inward<'a>(code: &'a str, pos: u32, options: &ScanOptions) -> Vec<BalancedTag<'a>> {
    let mut arena: Vec<InwardTag<'a>> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut found: Option<usize> = None;

    scan(code, options, |token| {
        let range = Range::new(token.start, token.end);
        match effective_kind(token.kind, token.name, options) {
            ElementKind::Open => {
                arena.push(InwardTag {
                    name: token.name,
                    open: range,
                    close: None,
                    first_child: None,
                });
                stack.push(arena.len() - 1);
            }
            ElementKind::SelfClose => {
                arena.push(InwardTag {
                    name: token.name,
                    open: range,
                    close: None,
                    first_child: None,
                });
                let index = arena.len() - 1;
                if token.start < pos && pos < token.end {
                    found = Some(index);
                    return ControlFlow::Break(());
                }
                adopt_as_first_child(&mut arena, &stack, index);
            }
            ElementKind::Close => {
                let matched = stack
                    .iter()
                    .rposition(|&i| options.names_match(arena[i].name, token.name));
                let Some(depth) = matched else {
                    // Lone closing tag.
                    return ControlFlow::Continue(());
                };
                let index = stack[depth];
                stack.truncate(depth);
                arena[index].close = Some(range);
                if arena[index].open.start < pos && pos < token.end {
                    found = Some(index);
                    return ControlFlow::Break(());
                }
                adopt_as_first_child(&mut arena, &stack, index);
            }
        }
        ControlFlow::Continue(())
    });

    let mut result = Vec::new();
    let mut next = found;
    while let Some(index) = next {
        let tag = &arena[index];
        result.push(BalancedTag {
            name: tag.name,
            open: tag.open,
            close: tag.close,
        });
        next = tag.first_child;
    }
    result
}

/// Record `child` as the first child of the element on top of `stack`,
/// unless that element already has one.
fn adopt_as_first_child(arena: &mut [InwardTag<'_>], stack: &[usize], child: usize) {
    if let Some(&parent) = stack.last() {
        if arena[parent].first_child.is_none() {
            arena[parent].first_child = Some(child);
        }
    }
}
