//! Structural token scanners for markup and stylesheet documents.
//!
//! This crate knows how to find tags, attributes, selectors, declarations and
//! block boundaries in raw document text. It reports them as a stream of
//! events through a visitor closure that may stop the scan early with
//! [`ControlFlow::Break`](std::ops::ControlFlow::Break).
//!
//! The scanners never fail: malformed input (unterminated quotes, stray
//! braces, truncated tags) degrades to fewer or shorter events.
//!
//! # Coordinates
//!
//! Every offset is a `u32` byte offset into the scanned text. Documents larger
//! than `u32::MAX` bytes are scanned up to that length.
//!
//! # Modules
//!
//! - [`html`]: tag scanner, attribute parser, tag balancing
//! - [`css`]: rule/declaration scanner, value splitter, section balancing

mod cursor;
pub mod css;
pub mod html;
mod options;
mod range;

pub use cursor::Cursor;
pub use options::{ScanOptions, SpecialTag};
pub use range::{Range, RangeError};

/// Length of `source` as a scanner offset, saturating at `u32::MAX`.
#[inline]
pub fn source_len(source: &str) -> u32 {
    u32::try_from(source.len()).unwrap_or(u32::MAX)
}
