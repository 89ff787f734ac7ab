//! Output range accumulation.

use tagwalk_scan::Range;

/// Append `candidate` unless it is empty or equal to the last stored range.
///
/// Many computed sub-ranges coincide (a boolean attribute's full span and
/// name span, a single-word value and its only fragment); each coinciding
/// pair would otherwise be a redundant selection stop.
#[inline]
pub fn push_range(ranges: &mut Vec<Range>, candidate: Range) {
    if !candidate.is_empty() && ranges.last() != Some(&candidate) {
        ranges.push(candidate);
    }
}
