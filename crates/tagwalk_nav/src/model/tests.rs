use pretty_assertions::assert_eq;
use tagwalk_scan::Range;

use super::SelectionModel;

fn model(pairs: &[(u32, u32)]) -> SelectionModel {
    let ranges = pairs.iter().map(|&(s, e)| Range::new(s, e)).collect();
    SelectionModel {
        start: 0,
        end: 30,
        ranges,
    }
}

#[test]
fn empty_ranges_give_no_model() {
    assert_eq!(SelectionModel::new(0, 5, Vec::new()), None);
    assert_eq!(SelectionModel::spanning(Vec::new()), None);
}

#[test]
fn spanning_uses_hull() {
    let ranges = vec![Range::new(4, 10), Range::new(6, 12), Range::new(6, 8)];
    let model = SelectionModel::spanning(ranges);
    assert_eq!(model.map(|m| m.range()), Some(Range::new(4, 12)));
}

#[test]
fn caret_selects_first_stop_ahead() {
    let m = model(&[(1, 4), (5, 16), (11, 16)]);
    assert_eq!(m.find_region(Range::new(3, 3), false), Some(Range::new(1, 4)));
    assert_eq!(m.find_region(Range::new(0, 0), false), Some(Range::new(1, 4)));
    assert_eq!(m.find_region(Range::new(10, 10), false), Some(Range::new(5, 16)));
}

#[test]
fn selected_stop_advances() {
    let m = model(&[(1, 4), (5, 16), (11, 16)]);
    assert_eq!(m.find_region(Range::new(1, 4), false), Some(Range::new(5, 16)));
    assert_eq!(m.find_region(Range::new(5, 16), false), Some(Range::new(11, 16)));
}

#[test]
fn last_stop_is_exhausted() {
    let m = model(&[(1, 4), (5, 16), (11, 16)]);
    assert_eq!(m.find_region(Range::new(11, 16), false), None);
    assert_eq!(m.find_region(Range::new(1, 4), true), None);
}

#[test]
fn reverse_walks_backwards() {
    let m = model(&[(1, 4), (5, 16), (11, 16)]);
    assert_eq!(m.find_region(Range::new(11, 16), true), Some(Range::new(5, 16)));
    assert_eq!(m.find_region(Range::new(20, 20), true), Some(Range::new(11, 16)));
}

#[test]
fn continuation_points_past_the_item() {
    let m = SelectionModel {
        start: 3,
        end: 9,
        ranges: vec![Range::new(4, 5)],
    };
    assert_eq!(m.continuation(false), 9);
    assert_eq!(m.continuation(true), 3);
    assert!(m.contains(4));
    assert!(!m.contains(3));
}
