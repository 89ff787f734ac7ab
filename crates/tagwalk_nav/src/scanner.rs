//! Scanner seams.
//!
//! The navigators consume token streams through these traits so that a
//! stand-in scanner can replace the default `tagwalk_scan` implementations.

use std::ops::ControlFlow;

use tagwalk_scan::css::{self, CssToken};
use tagwalk_scan::html::{self, AttributeToken, BalancedTag, HtmlToken};
use tagwalk_scan::{Range, ScanOptions};

/// Markup token source.
pub trait MarkupScanner {
    /// Call `visitor` for every tag in document order until it breaks.
    fn scan<'a>(&self, code: &'a str, visitor: &mut dyn FnMut(HtmlToken<'a>) -> ControlFlow<()>);

    /// Attributes of one tag, relative to `tag_src`.
    fn attributes<'a>(&self, tag_src: &'a str, name: &str) -> Vec<AttributeToken<'a>>;

    fn balanced_outward<'a>(
        &self,
        code: &'a str,
        pos: u32,
        options: &ScanOptions,
    ) -> Vec<BalancedTag<'a>>;

    fn balanced_inward<'a>(
        &self,
        code: &'a str,
        pos: u32,
        options: &ScanOptions,
    ) -> Vec<BalancedTag<'a>>;
}

/// Stylesheet token source.
pub trait StylesheetScanner {
    /// Call `visitor` for every event in document order until it breaks.
    fn scan(&self, code: &str, visitor: &mut dyn FnMut(CssToken) -> ControlFlow<()>);

    /// Fragments of a property value, relative to `value`.
    fn split_value(&self, value: &str) -> Vec<Range>;

    fn balanced_outward(&self, code: &str, pos: u32) -> Vec<Range>;

    fn balanced_inward(&self, code: &str, pos: u32) -> Vec<Range>;
}

/// The `tagwalk_scan` markup scanner with fixed options.
#[derive(Clone, Debug, Default)]
pub struct HtmlScanner {
    pub options: ScanOptions,
}

impl HtmlScanner {
    pub fn new(options: ScanOptions) -> Self {
        HtmlScanner { options }
    }
}

impl MarkupScanner for HtmlScanner {
    fn scan<'a>(&self, code: &'a str, visitor: &mut dyn FnMut(HtmlToken<'a>) -> ControlFlow<()>) {
        html::scan(code, &self.options, visitor);
    }

    fn attributes<'a>(&self, tag_src: &'a str, name: &str) -> Vec<AttributeToken<'a>> {
        html::attributes(tag_src, name)
    }

    fn balanced_outward<'a>(
        &self,
        code: &'a str,
        pos: u32,
        options: &ScanOptions,
    ) -> Vec<BalancedTag<'a>> {
        html::balanced_outward(code, pos, options)
    }

    fn balanced_inward<'a>(
        &self,
        code: &'a str,
        pos: u32,
        options: &ScanOptions,
    ) -> Vec<BalancedTag<'a>> {
        html::balanced_inward(code, pos, options)
    }
}

/// The `tagwalk_scan` stylesheet scanner.
#[derive(Copy, Clone, Debug, Default)]
pub struct CssScanner;

impl StylesheetScanner for CssScanner {
    fn scan(&self, code: &str, visitor: &mut dyn FnMut(CssToken) -> ControlFlow<()>) {
        css::scan(code, visitor);
    }

    fn split_value(&self, value: &str) -> Vec<Range> {
        css::split_value(value)
    }

    fn balanced_outward(&self, code: &str, pos: u32) -> Vec<Range> {
        css::balanced_outward(code, pos)
    }

    fn balanced_inward(&self, code: &str, pos: u32) -> Vec<Range> {
        css::balanced_inward(code, pos)
    }
}
