//! Position-aware navigation over markup and stylesheet documents.
//!
//! Every operation is a pure function of the document text, a byte
//! position and a few flags. It makes one scan pass through a scanner from
//! `tagwalk_scan`, stops as soon as the answer cannot change, and returns
//! `None` (or an empty list) when there is nothing to find. No state
//! survives a call.
//!
//! # Entry points
//!
//! | operation | markup | stylesheet |
//! |-----------|--------|------------|
//! | enclosing construct | [`context_tag`] | [`context_section`] |
//! | next/previous item | [`select_item`] | [`select_item_css`] |
//! | selection stepping | [`step_selection`] | [`step_selection_css`] |
//! | balancing | [`balance`] | [`balance_css`] |
//!
//! The free functions use the default scanners. [`HtmlNavigator`] and
//! [`CssNavigator`] accept any [`MarkupScanner`] / [`StylesheetScanner`].

mod balance;
mod css;
mod html;
mod model;
mod pool;
mod range_list;
mod scanner;
mod syntax;

pub use balance::{balance_regions, Direction, ParseDirectionError};
pub use css::CssNavigator;
pub use html::HtmlNavigator;
pub use model::{ContextTag, CssProperty, CssSection, SelectionModel};
pub use pool::{TokenRange, TokenRangePool, TokenStack, INLINE_DEPTH};
pub use range_list::push_range;
pub use scanner::{CssScanner, HtmlScanner, MarkupScanner, StylesheetScanner};
pub use syntax::{Syntax, UnknownSyntax};

pub use tagwalk_scan::html::{AttributeToken, BalancedTag, ElementKind};
pub use tagwalk_scan::{Range, RangeError, ScanOptions};

/// Clamp `pos` to the document.
fn clamp(code: &str, pos: u32) -> u32 {
    pos.min(tagwalk_scan::source_len(code))
}

fn clamp_range(code: &str, range: Range) -> Range {
    Range::new(clamp(code, range.start), clamp(code, range.end))
}

/// The tag strictly enclosing `pos`.
pub fn context_tag(code: &str, pos: u32) -> Option<ContextTag<'_>> {
    HtmlNavigator::new().context_tag(code, clamp(code, pos))
}

/// The CSS section enclosing `pos`.
pub fn context_section(code: &str, pos: u32) -> Option<CssSection> {
    CssNavigator::new().context_section(code, clamp(code, pos))
}

/// Selection stops for the next (or previous) tag.
pub fn select_item(code: &str, pos: u32, is_prev: bool) -> Option<SelectionModel> {
    HtmlNavigator::new().select_item(code, clamp(code, pos), is_prev)
}

/// Selection stops for the next (or previous) selector or property.
pub fn select_item_css(code: &str, pos: u32, is_prev: bool) -> Option<SelectionModel> {
    CssNavigator::new().select_item(code, clamp(code, pos), is_prev)
}

/// Top-level declarations of a CSS section.
pub fn section_properties(code: &str, section: &CssSection) -> Vec<CssProperty> {
    CssNavigator::new().section_properties(code, section)
}

/// Balanced tags around `pos`.
pub fn balance<'a>(
    code: &'a str,
    pos: u32,
    direction: Direction,
    options: &ScanOptions,
) -> Vec<BalancedTag<'a>> {
    HtmlNavigator::new().balance(code, clamp(code, pos), direction, options)
}

/// Balanced stylesheet ranges around `pos`.
pub fn balance_css(code: &str, pos: u32, direction: Direction) -> Vec<Range> {
    CssNavigator::new().balance(code, clamp(code, pos), direction)
}

/// The range to select after `selection` when stepping through markup items.
///
/// Walks the stops of the item at the selection; once they are used up,
/// moves on to the neighbouring item.
pub fn step_selection(code: &str, selection: Range, is_prev: bool) -> Option<Range> {
    HtmlNavigator::new().step_selection(code, clamp_range(code, selection), is_prev)
}

/// The range to select after `selection` when stepping through stylesheet
/// items.
pub fn step_selection_css(code: &str, selection: Range, is_prev: bool) -> Option<Range> {
    CssNavigator::new().step_selection(code, clamp_range(code, selection), is_prev)
}
