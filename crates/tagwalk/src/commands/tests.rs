use pretty_assertions::assert_eq;
use tagwalk_nav::{balance_css, Direction, Range, Syntax};

use super::{document_range, execute};
use crate::{CliConfig, CliError, Command};

fn config(command: Command, path: &str, selection: Range) -> CliConfig {
    CliConfig {
        command,
        path: path.to_string(),
        selection,
        syntax: None,
        prev: false,
        direction: Direction::Outward,
    }
}

fn at(command: Command, path: &str, pos: u32) -> CliConfig {
    config(command, path, Range::new(pos, pos))
}

fn lines(config: &CliConfig, code: &str) -> Vec<String> {
    match execute(config, code) {
        Ok(lines) => lines,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

const IMG: &str = r#"<img src="a.png" class="x y">"#;
const RULE: &str = "a { color: red; }";

#[test]
fn markup_context_lists_attributes() {
    assert_eq!(
        lines(&at(Command::Context, "page.html", 5), IMG),
        vec![
            "tag img open 0..29",
            "attr src 5..8 9..16",
            "attr class 17..22 23..28",
        ]
    );
}

#[test]
fn closing_tag_context_has_no_attributes() {
    assert_eq!(
        lines(&at(Command::Context, "page.html", 5), "<a></a>"),
        vec!["tag a close 3..7"]
    );
}

#[test]
fn nothing_found_prints_none() {
    assert_eq!(lines(&at(Command::Context, "page.html", 0), "<a>"), vec!["none"]);
    assert_eq!(lines(&at(Command::Select, "page.html", 3), "<a>"), vec!["none"]);
    assert_eq!(lines(&at(Command::Context, "site.css", 0), "a"), vec!["none"]);
}

#[test]
fn markup_select_prints_item_then_stops() {
    assert_eq!(
        lines(&at(Command::Select, "page.html", 0), IMG),
        vec![
            "item 0..29",
            "1..4",
            "5..16",
            "10..15",
            "17..28",
            "24..27",
            "24..25",
            "26..27",
        ]
    );
}

#[test]
fn markup_step_follows_the_selection() {
    let code = "<a href=x><b>";
    let mut step = config(Command::Step, "page.html", Range::new(3, 9));
    assert_eq!(lines(&step, code), vec!["8..9"]);

    step.prev = true;
    assert_eq!(lines(&step, code), vec!["1..2"]);
}

#[test]
fn markup_balance_honours_xml_mode() {
    let code = "<p><img></img></p>";
    let html = at(Command::Balance, "page.html", 5);
    assert_eq!(lines(&html, code), vec!["img 3..8", "p 0..18 3..14"]);

    // The empty content of `<img></img>` is not a region.
    let xml = at(Command::Balance, "page.xml", 5);
    assert_eq!(lines(&xml, code), vec!["img 3..14", "p 0..18 3..14"]);
}

#[test]
fn markup_balance_lists_element_then_content() {
    let code = "<ul><li>a</li></ul>";
    let config = at(Command::Balance, "list.html", 9);
    assert_eq!(lines(&config, code), vec!["li 4..14 8..9", "ul 0..19 4..14"]);
}

#[test]
fn document_range_spans_the_source() {
    assert_eq!(document_range(12).ok(), Some(Range::new(0, 12)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn oversized_document_is_rejected() {
    let len = usize::try_from(u64::from(u32::MAX) + 1).unwrap_or(usize::MAX);
    assert!(matches!(
        document_range(len),
        Err(CliError::DocumentTooLarge(_))
    ));
}

#[test]
fn stylesheet_context_prints_section_and_body() {
    let config = at(Command::Context, "site.css", 11);
    assert_eq!(lines(&config, RULE), vec!["section 0..17 body 3..16"]);
}

#[test]
fn stylesheet_properties() {
    let config = at(Command::Properties, "site.css", 11);
    assert_eq!(lines(&config, RULE), vec!["4..9 11..14 color: red"]);
}

#[test]
fn stylesheet_select_and_step() {
    let code = "color: red, blue;";
    let mut select = at(Command::Select, "site.scss", 0);
    assert_eq!(
        lines(&select, code),
        vec!["item 0..16", "0..6", "7..16", "7..10", "12..16"]
    );

    select.command = Command::Step;
    select.selection = Range::new(7, 16);
    assert_eq!(lines(&select, code), vec!["7..10"]);
}

#[test]
fn stylesheet_balance_renders_each_range() {
    let code = "a { b { c: d } }";
    let mut config = at(Command::Balance, "site.less", 11);
    for direction in [Direction::Outward, Direction::Inward] {
        config.direction = direction;
        let expected: Vec<String> = balance_css(code, 11, direction)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines(&config, code), expected);
    }
}

#[test]
fn position_past_the_end_is_an_error() {
    let result = execute(&at(Command::Context, "page.html", 10), "<a>");
    assert!(matches!(
        result,
        Err(CliError::PositionOutOfBounds { pos: 10, len: 3 })
    ));
}

#[test]
fn unsupported_combinations() {
    assert!(matches!(
        execute(&at(Command::Properties, "page.html", 0), "<a>"),
        Err(CliError::Unsupported {
            command: "properties",
            syntax: "html"
        })
    ));

    let mut sass = at(Command::Context, "site.sass", 0);
    assert!(matches!(
        execute(&sass, "a\n  b: c"),
        Err(CliError::Unsupported { syntax: "sass", .. })
    ));
    sass.syntax = Some(Syntax::Pug);
    assert!(matches!(
        execute(&sass, "a"),
        Err(CliError::Unsupported { syntax: "pug", .. })
    ));
}
