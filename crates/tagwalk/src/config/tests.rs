use pretty_assertions::assert_eq;
use tagwalk_nav::{Direction, Range, Syntax};

use super::{CliConfig, Command};
use crate::CliError;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn parse(list: &[&str]) -> Result<CliConfig, CliError> {
    CliConfig::parse(&args(list))
}

#[test]
fn positional_arguments() {
    let Ok(config) = parse(&["select", "page.html", "12"]) else {
        panic!("expected a valid configuration");
    };
    assert_eq!(
        config,
        CliConfig {
            command: Command::Select,
            path: "page.html".to_string(),
            selection: Range::new(12, 12),
            syntax: None,
            prev: false,
            direction: Direction::Outward,
        }
    );
    assert_eq!(config.pos(), 12);
}

#[test]
fn flags_may_appear_anywhere() {
    let Ok(config) = parse(&["--prev", "step", "--css", "-", "3..7", "--inward"]) else {
        panic!("expected a valid configuration");
    };
    assert_eq!(config.command, Command::Step);
    assert_eq!(config.path, "-");
    assert_eq!(config.selection, Range::new(3, 7));
    assert_eq!(config.syntax, Some(Syntax::Css));
    assert!(config.prev);
    assert_eq!(config.direction, Direction::Inward);
}

#[test]
fn valued_options() {
    let Ok(config) = parse(&["balance", "x", "0", "--syntax=SCSS", "--direction=inward"]) else {
        panic!("expected a valid configuration");
    };
    assert_eq!(config.syntax, Some(Syntax::Scss));
    assert_eq!(config.direction, Direction::Inward);
}

#[test]
fn syntax_falls_back_to_extension_then_html() {
    let syntax_of = |path: &str| {
        parse(&["context", path, "0"])
            .map(|config| config.resolved_syntax())
            .ok()
    };
    assert_eq!(syntax_of("theme.less"), Some(Syntax::Less));
    assert_eq!(syntax_of("layout.XML"), Some(Syntax::Xml));
    assert_eq!(syntax_of("notes.txt"), Some(Syntax::Html));
    assert_eq!(syntax_of("-"), Some(Syntax::Html));
}

#[test]
fn explicit_syntax_wins_over_extension() {
    let config = parse(&["context", "theme.css", "0", "--xml"]).ok();
    assert_eq!(config.map(|c| c.resolved_syntax()), Some(Syntax::Xml));
}

#[test]
fn xml_syntax_scans_in_xml_mode() {
    let config = parse(&["balance", "feed.xml", "0"]).ok();
    assert_eq!(config.map(|c| c.scan_options().xml), Some(true));
}

#[test]
fn missing_arguments() {
    assert!(matches!(
        parse(&[]),
        Err(CliError::MissingArgument("command"))
    ));
    assert!(matches!(
        parse(&["context"]),
        Err(CliError::MissingArgument("file"))
    ));
    assert!(matches!(
        parse(&["context", "a.html"]),
        Err(CliError::MissingArgument("position"))
    ));
}

#[test]
fn rejected_arguments() {
    assert!(matches!(
        parse(&["jump", "a.html", "0"]),
        Err(CliError::UnknownCommand(name)) if name == "jump"
    ));
    assert!(matches!(
        parse(&["context", "a.html", "0", "--verbose"]),
        Err(CliError::UnknownFlag(flag)) if flag == "--verbose"
    ));
    assert!(matches!(
        parse(&["context", "a.html", "0", "1"]),
        Err(CliError::UnexpectedArgument(arg)) if arg == "1"
    ));
    assert!(matches!(
        parse(&["context", "a.html", "0", "--syntax=cobol"]),
        Err(CliError::Syntax(_))
    ));
    assert!(matches!(
        parse(&["balance", "a.html", "0", "--direction=up"]),
        Err(CliError::Direction(_))
    ));
}

#[test]
fn invalid_positions() {
    for position in ["x", "-1", "4..", "..4", "9..3", "1..2..3"] {
        assert!(
            matches!(
                parse(&["step", "a.html", position]),
                Err(CliError::InvalidPosition(text)) if text == position
            ),
            "{position} should be rejected"
        );
    }
}
