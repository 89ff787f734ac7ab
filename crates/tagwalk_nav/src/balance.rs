//! Balance pass-through.
//!
//! Balancing itself lives in the scanners; the navigators only pick the
//! primitive for the requested direction and forward the arguments.

use std::fmt;
use std::str::FromStr;

use tagwalk_scan::html::BalancedTag;
use tagwalk_scan::{Range, ScanOptions};
use tracing::debug;

use crate::css::CssNavigator;
use crate::html::HtmlNavigator;
use crate::range_list::push_range;
use crate::scanner::{MarkupScanner, StylesheetScanner};

/// Balancing direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Shrinking: the enclosing construct, then its first children.
    Inward,
    /// Growing: every enclosing construct, innermost first.
    Outward,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Inward => "inward",
            Direction::Outward => "outward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown balance direction `{}`, expected `inward` or `outward`",
            self.0
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inward" => Ok(Direction::Inward),
            "outward" => Ok(Direction::Outward),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

impl<S: MarkupScanner> HtmlNavigator<S> {
    /// Balanced tags around `pos`, exactly as the scanner reports them.
    pub fn balance<'a>(
        &self,
        code: &'a str,
        pos: u32,
        direction: Direction,
        options: &ScanOptions,
    ) -> Vec<BalancedTag<'a>> {
        debug!(pos, %direction, "balance markup");
        match direction {
            Direction::Inward => self.scanner().balanced_inward(code, pos, options),
            Direction::Outward => self.scanner().balanced_outward(code, pos, options),
        }
    }
}

impl<S: StylesheetScanner> CssNavigator<S> {
    /// Balanced stylesheet ranges around `pos`, exactly as the scanner
    /// reports them.
    pub fn balance(&self, code: &str, pos: u32, direction: Direction) -> Vec<Range> {
        debug!(pos, %direction, "balance stylesheet");
        match direction {
            Direction::Inward => self.scanner().balanced_inward(code, pos),
            Direction::Outward => self.scanner().balanced_outward(code, pos),
        }
    }
}

/// Editor regions for balanced tags: each element, then its content.
pub fn balance_regions(tags: &[BalancedTag<'_>]) -> Vec<Range> {
    let mut regions = Vec::new();
    for tag in tags {
        push_range(&mut regions, tag.outer());
        if let Some(inner) = tag.inner() {
            push_range(&mut regions, inner);
        }
    }
    regions
}
