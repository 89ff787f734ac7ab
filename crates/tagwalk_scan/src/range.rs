//! Half-open byte ranges.
//!
//! Compact 8-byte range representation shared by the scanners and the
//! navigation layer.

use std::fmt;

/// Error when creating a range from offsets that cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Range start exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Range end exceeds `u32::MAX`.
    EndTooLarge(usize),
    /// Range start lies after its end.
    Inverted { start: usize, end: usize },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::StartTooLarge(v) => {
                write!(f, "range start {v} exceeds u32::MAX ({})", u32::MAX)
            }
            RangeError::EndTooLarge(v) => {
                write!(f, "range end {v} exceeds u32::MAX ({})", u32::MAX)
            }
            RangeError::Inverted { start, end } => {
                write!(f, "range start {start} is after range end {end}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Half-open byte range `[start, end)`.
///
/// A range is a valid selection only when `start < end`; zero-width ranges
/// are representable but never emitted as navigation results.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Range { start, end }
    }

    /// Try to create a range from a `usize` byte range.
    ///
    /// Fails when either bound exceeds `u32::MAX` or the range is inverted.
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, RangeError> {
        if range.start > range.end {
            return Err(RangeError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        let start =
            u32::try_from(range.start).map_err(|_| RangeError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| RangeError::EndTooLarge(range.end))?;
        Ok(Range { start, end })
    }

    /// Length of the range in bytes. Inverted ranges have length zero.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if the range covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if an offset is within this range.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if another range is fully contained within this range.
    ///
    /// Both bounds are inclusive, so a range contains itself and a caret
    /// sitting on either edge.
    #[inline]
    pub fn contains_range(&self, other: Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Translate the range by `offset` bytes.
    ///
    /// Used to bring ranges computed over a local slice back into document
    /// coordinates.
    #[inline]
    #[must_use]
    pub const fn shift(self, offset: u32) -> Range {
        Range {
            start: self.start.saturating_add(offset),
            end: self.end.saturating_add(offset),
        }
    }

    /// Convert to a `std::ops::Range` for slicing.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(range: Range) -> Self {
        range.to_range()
    }
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);
