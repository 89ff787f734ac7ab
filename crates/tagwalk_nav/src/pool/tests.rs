use pretty_assertions::assert_eq;

use super::{TokenRange, TokenRangePool, INLINE_DEPTH};

#[test]
fn alloc_fills_fresh_slot() {
    let mut pool = TokenRangePool::new();
    let range = pool.alloc(1, 5, Some(6));
    assert_eq!(
        range,
        TokenRange {
            start: 1,
            end: 5,
            delimiter: Some(6)
        }
    );
    assert_eq!(pool.available(), 0);
}

#[test]
fn released_slot_is_reused_and_overwritten() {
    let mut pool = TokenRangePool::new();
    let first = pool.alloc(1, 2, Some(3));
    pool.release(Some(first));
    assert_eq!(pool.available(), 1);

    let second = pool.alloc(7, 9, None);
    assert_eq!(second.delimiter, None);
    assert_eq!((second.start, second.end), (7, 9));
    assert_eq!(pool.available(), 0);
}

#[test]
fn release_none_is_noop() {
    let mut pool = TokenRangePool::new();
    pool.release(None);
    assert_eq!(pool.available(), 0);
}

#[test]
fn free_list_is_bounded() {
    let mut pool = TokenRangePool::new();
    for i in 0..20u32 {
        pool.release(Some(TokenRange {
            start: i,
            end: i + 1,
            delimiter: None,
        }));
    }
    assert_eq!(pool.available(), INLINE_DEPTH);
    pool.clear();
    assert_eq!(pool.available(), 0);
}
