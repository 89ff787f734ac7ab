use pretty_assertions::assert_eq;
use tagwalk_scan::html::ElementKind;
use tagwalk_scan::Range;

use super::{token_list, value_range, HtmlNavigator};

fn ranges(pairs: &[(u32, u32)]) -> Vec<Range> {
    pairs.iter().map(|&(s, e)| Range::new(s, e)).collect()
}

fn stops(code: &str, pos: u32, is_prev: bool) -> Option<Vec<Range>> {
    HtmlNavigator::new()
        .select_item(code, pos, is_prev)
        .map(|model| model.ranges)
}

const IMG: &str = r#"<img src="a.png" class="x y">"#;

// ─── Context tag ────────────────────────────────────────────────

#[test]
fn context_tag_inside_opening_tag() {
    let tag = HtmlNavigator::new().context_tag(IMG, 6);
    let tag = tag.map(|t| (t.name, t.kind, t.start, t.end, t.attributes.as_ref().map(Vec::len)));
    assert_eq!(tag, Some(("img", ElementKind::Open, 0, 29, Some(2))));
}

#[test]
fn context_tag_attribute_offsets_are_absolute() {
    let code = r#"<p><a href="x"></a></p>"#;
    let tag = HtmlNavigator::new().context_tag(code, 5);
    let attrs = tag.and_then(|t| t.attributes).unwrap_or_default();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].name_range(), Range::new(6, 10));
    assert_eq!(attrs[0].value_range(), Some(Range::new(11, 14)));
}

#[test]
fn context_tag_closing_tag_has_no_attributes() {
    let tag = HtmlNavigator::new().context_tag("<b></b>", 5);
    assert_eq!(
        tag.map(|t| (t.kind, t.attributes.is_none())),
        Some((ElementKind::Close, true))
    );
}

#[test]
fn context_tag_in_text_is_none() {
    assert_eq!(HtmlNavigator::new().context_tag("<b>text</b>", 4), None);
}

#[test]
fn context_tag_on_tag_edge_is_none() {
    // `<` and the position just past `>` are not strictly inside.
    assert_eq!(HtmlNavigator::new().context_tag("<b>", 0), None);
    assert_eq!(HtmlNavigator::new().context_tag("<b>", 3), None);
}

// ─── Select next ────────────────────────────────────────────────

#[test]
fn next_item_decomposes_attributes() {
    assert_eq!(
        stops(IMG, 0, false),
        Some(ranges(&[
            (1, 4),
            (5, 16),
            (10, 15),
            (17, 28),
            (24, 27),
            (24, 25),
            (26, 27),
        ]))
    );
}

#[test]
fn next_item_skips_closing_tags() {
    let code = "<a></a><br/>";
    let model = HtmlNavigator::new().select_item(code, 3, false);
    assert_eq!(model.map(|m| (m.start, m.end)), Some((7, 12)));
}

#[test]
fn next_item_from_inside_tag_selects_that_tag() {
    let model = HtmlNavigator::new().select_item(IMG, 7, false);
    assert_eq!(model.map(|m| m.range()), Some(Range::new(0, 29)));
}

#[test]
fn next_item_past_last_tag_is_none() {
    assert_eq!(stops("<a>text", 4, false), None);
}

#[test]
fn boolean_attribute_collapses_to_one_stop() {
    assert_eq!(
        stops("<input disabled>", 0, false),
        Some(ranges(&[(1, 6), (7, 15)]))
    );
}

#[test]
fn single_class_is_not_repeated() {
    // Full value and its only class name coincide.
    assert_eq!(
        stops(r#"<a class=x>"#, 0, false),
        Some(ranges(&[(1, 2), (3, 10), (9, 10)]))
    );
}

#[test]
fn empty_value_has_no_value_stop() {
    assert_eq!(
        stops(r#"<a b="">"#, 0, false),
        Some(ranges(&[(1, 2), (3, 7)]))
    );
}

#[test]
fn brace_value_is_unbraced() {
    assert_eq!(
        stops("<C on={go}/>", 0, false),
        Some(ranges(&[(1, 2), (3, 10), (7, 9)]))
    );
}

// ─── Select previous ────────────────────────────────────────────

#[test]
fn previous_item_is_last_tag_before_position() {
    let code = "<a><b></b><i>";
    let model = HtmlNavigator::new().select_item(code, 10, true);
    assert_eq!(model.map(|m| m.range()), Some(Range::new(3, 6)));
}

#[test]
fn previous_boundary_is_exclusive() {
    let code = "<a><b>";
    let model = HtmlNavigator::new().select_item(code, 3, true);
    assert_eq!(model.map(|m| m.range()), Some(Range::new(0, 3)));
}

#[test]
fn previous_at_document_start_is_none() {
    assert_eq!(stops("<a>", 0, true), None);
}

// ─── Helpers ────────────────────────────────────────────────────

#[test]
fn unquoting_rules() {
    assert_eq!(value_range("\"a\"", 10, 13), Range::new(11, 12));
    assert_eq!(value_range("'a", 10, 12), Range::new(11, 12));
    assert_eq!(value_range("{a}", 10, 13), Range::new(11, 12));
    assert_eq!(value_range("{a", 10, 12), Range::new(10, 12));
    assert_eq!(value_range("a", 10, 11), Range::new(10, 11));
}

#[test]
fn token_list_splits_on_blank_runs() {
    assert_eq!(token_list("  a\t\tbc \n"), ranges(&[(2, 3), (5, 7)]));
    assert_eq!(token_list("a\u{a0}b"), ranges(&[(0, 1), (3, 4)]));
    assert!(token_list(" \r ").is_empty());
}

#[test]
fn empty_document_has_no_results() {
    let nav = HtmlNavigator::new();
    assert_eq!(nav.context_tag("", 0), None);
    assert_eq!(nav.select_item("", 0, false), None);
    assert_eq!(nav.select_item("", 0, true), None);
}

// ─── Early stop ─────────────────────────────────────────────────

mod early_stop {
    use std::cell::Cell;
    use std::ops::ControlFlow;

    use pretty_assertions::assert_eq;
    use tagwalk_scan::html::{AttributeToken, BalancedTag, ElementKind, HtmlToken};
    use tagwalk_scan::{Range, ScanOptions};

    use crate::html::HtmlNavigator;
    use crate::scanner::MarkupScanner;

    const fn tag(name: &'static str, kind: ElementKind, start: u32, end: u32) -> HtmlToken<'static> {
        HtmlToken {
            name,
            kind,
            start,
            end,
        }
    }

    /// `<a>` 0..3, `</a>` 5..9, `<b>` 12..15, `<br/>` 20..25.
    const TAGS: [HtmlToken<'static>; 4] = [
        tag("a", ElementKind::Open, 0, 3),
        tag("a", ElementKind::Close, 5, 9),
        tag("b", ElementKind::Open, 12, 15),
        tag("br", ElementKind::SelfClose, 20, 25),
    ];

    /// Replays `TAGS` and counts the events handed to the visitor.
    #[derive(Default)]
    struct Replay {
        delivered: Cell<usize>,
    }

    impl MarkupScanner for Replay {
        fn scan<'a>(&self, _: &'a str, visitor: &mut dyn FnMut(HtmlToken<'a>) -> ControlFlow<()>) {
            for token in TAGS {
                self.delivered.set(self.delivered.get() + 1);
                if visitor(token).is_break() {
                    break;
                }
            }
        }

        fn attributes<'a>(&self, _: &'a str, _: &str) -> Vec<AttributeToken<'a>> {
            Vec::new()
        }

        fn balanced_outward<'a>(&self, _: &'a str, _: u32, _: &ScanOptions) -> Vec<BalancedTag<'a>> {
            Vec::new()
        }

        fn balanced_inward<'a>(&self, _: &'a str, _: u32, _: &ScanOptions) -> Vec<BalancedTag<'a>> {
            Vec::new()
        }
    }

    fn navigator() -> HtmlNavigator<Replay> {
        HtmlNavigator::with_scanner(Replay::default())
    }

    #[test]
    fn context_tag_stops_at_first_tag_ending_past_pos() {
        let nav = navigator();
        assert_eq!(nav.context_tag("", 10), None);
        assert_eq!(nav.scanner().delivered.get(), 3);
    }

    #[test]
    fn context_tag_stops_at_enclosing_tag() {
        let nav = navigator();
        let tag = nav.context_tag("", 13).map(|t| (t.name, t.start, t.end));
        assert_eq!(tag, Some(("b", 12, 15)));
        assert_eq!(nav.scanner().delivered.get(), 3);
    }

    #[test]
    fn previous_item_stops_at_first_tag_starting_at_pos() {
        let nav = navigator();
        let model = nav.select_item("", 12, true).map(|m| m.range());
        assert_eq!(model, Some(Range::new(0, 3)));
        assert_eq!(nav.scanner().delivered.get(), 3);
    }

    #[test]
    fn next_item_stops_at_first_match() {
        let nav = navigator();
        let model = nav.select_item("", 4, false).map(|m| m.range());
        assert_eq!(model, Some(Range::new(12, 15)));
        assert_eq!(nav.scanner().delivered.get(), 3);
    }
}
