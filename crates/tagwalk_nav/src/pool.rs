//! Reusable `(start, end, delimiter)` triples for the selector stack.
//!
//! A triple is a plain `Copy` value, so the pool never hands out shared
//! storage; it keeps released slots inline and hands them back on the next
//! allocation. Both the pool and the stacks built from it live for exactly
//! one scan call.

use smallvec::SmallVec;

/// Nesting depth kept inline before a stack spills to the heap.
pub const INLINE_DEPTH: usize = 16;

/// A token span with an optional delimiter offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRange {
    pub start: u32,
    pub end: u32,
    pub delimiter: Option<u32>,
}

/// Inline stack of open token ranges.
pub type TokenStack = SmallVec<[TokenRange; INLINE_DEPTH]>;

/// Free list of token range slots, bounded to [`INLINE_DEPTH`].
#[derive(Debug, Default)]
pub struct TokenRangePool {
    free: SmallVec<[TokenRange; INLINE_DEPTH]>,
}

impl TokenRangePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a slot from the pool, or a fresh one, and fill it.
    pub fn alloc(&mut self, start: u32, end: u32, delimiter: Option<u32>) -> TokenRange {
        let mut slot = self.free.pop().unwrap_or_default();
        slot.start = start;
        slot.end = end;
        slot.delimiter = delimiter;
        slot
    }

    /// Return a slot. `None` is ignored, as is any slot past the inline bound.
    pub fn release(&mut self, range: Option<TokenRange>) {
        if let Some(range) = range {
            if self.free.len() < INLINE_DEPTH {
                self.free.push(range);
            }
        }
    }

    /// Number of slots waiting for reuse.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Drop all released slots.
    pub fn clear(&mut self) {
        self.free.clear();
    }
}

#[cfg(test)]
mod tests;
