//! Command handlers.
//!
//! Each handler runs one navigator operation and renders the answer as text
//! lines, one range per line in `start..end` form. A lookup that finds
//! nothing prints `none`.

use tagwalk_nav::{
    balance_regions, CssNavigator, ElementKind, HtmlNavigator, HtmlScanner, Range,
    SelectionModel, Syntax,
};
use tracing::debug;

use crate::{CliConfig, CliError, Command};

const NONE: &str = "none";

/// Which navigator a document goes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Document {
    Markup,
    Stylesheet,
}

impl Document {
    fn of(syntax: Syntax, command: Command) -> Result<Self, CliError> {
        if syntax.is_html() {
            Ok(Document::Markup)
        } else if syntax.is_css() {
            Ok(Document::Stylesheet)
        } else {
            Err(CliError::Unsupported {
                command: command.name(),
                syntax: syntax.name(),
            })
        }
    }
}

/// Run `config.command` over `code`.
pub fn execute(config: &CliConfig, code: &str) -> Result<Vec<String>, CliError> {
    let len = document_range(code.len())?.end;
    if config.selection.end > len {
        return Err(CliError::PositionOutOfBounds {
            pos: config.selection.end,
            len,
        });
    }

    let syntax = config.resolved_syntax();
    let document = Document::of(syntax, config.command)?;
    debug!(command = config.command.name(), %syntax, pos = config.pos(), "execute");

    let lines = match document {
        Document::Markup => {
            let nav = HtmlNavigator::with_scanner(HtmlScanner::new(config.scan_options()));
            match config.command {
                Command::Context => markup_context(&nav, code, config.pos()),
                Command::Select => {
                    render_model(nav.select_item(code, config.pos(), config.prev))
                }
                Command::Step => {
                    render_step(nav.step_selection(code, config.selection, config.prev))
                }
                Command::Balance => markup_balance(&nav, code, config),
                Command::Properties => {
                    return Err(CliError::Unsupported {
                        command: Command::Properties.name(),
                        syntax: syntax.name(),
                    })
                }
            }
        }
        Document::Stylesheet => {
            let nav = CssNavigator::new();
            match config.command {
                Command::Context => stylesheet_context(&nav, code, config.pos()),
                Command::Select => {
                    render_model(nav.select_item(code, config.pos(), config.prev))
                }
                Command::Step => {
                    render_step(nav.step_selection(code, config.selection, config.prev))
                }
                Command::Balance => {
                    render_ranges(&nav.balance(code, config.pos(), config.direction))
                }
                Command::Properties => properties(&nav, code, config.pos()),
            }
        }
    };
    Ok(lines)
}

/// The whole document as a range; offsets past `u32::MAX` cannot be
/// addressed.
fn document_range(len: usize) -> Result<Range, CliError> {
    Range::try_from_range(0..len).map_err(CliError::DocumentTooLarge)
}

/// `tag <name> <kind> <range>`, then `attr <name> <name range> <value range>`
/// per attribute.
fn markup_context(nav: &HtmlNavigator, code: &str, pos: u32) -> Vec<String> {
    let Some(tag) = nav.context_tag(code, pos) else {
        return vec![NONE.to_string()];
    };
    let mut lines = vec![format!(
        "tag {} {} {}",
        tag.name,
        kind_name(tag.kind),
        Range::new(tag.start, tag.end)
    )];
    for attr in tag.attributes.unwrap_or_default() {
        let value = attr
            .value_range()
            .map_or_else(|| NONE.to_string(), |r| r.to_string());
        lines.push(format!("attr {} {} {}", attr.name, attr.name_range(), value));
    }
    lines
}

/// `<name> <regions>` per balanced tag: the element, then its content when
/// that is non-empty.
fn markup_balance(nav: &HtmlNavigator, code: &str, config: &CliConfig) -> Vec<String> {
    let options = config.scan_options();
    nav.balance(code, config.pos(), config.direction, &options)
        .iter()
        .map(|tag| {
            let regions = balance_regions(std::slice::from_ref(tag));
            let mut line = tag.name.to_string();
            for region in regions {
                line.push(' ');
                line.push_str(&region.to_string());
            }
            line
        })
        .collect()
}

fn kind_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Open => "open",
        ElementKind::Close => "close",
        ElementKind::SelfClose => "self-close",
    }
}

/// `section <range> body <range>`.
fn stylesheet_context(nav: &CssNavigator, code: &str, pos: u32) -> Vec<String> {
    match nav.context_section(code, pos) {
        Some(section) => vec![format!(
            "section {} body {}",
            section.range(),
            section.body()
        )],
        None => vec![NONE.to_string()],
    }
}

/// `<name range> <value range> <declaration text>` per declaration of the
/// section around `pos`.
fn properties(nav: &CssNavigator, code: &str, pos: u32) -> Vec<String> {
    let Some(section) = nav.context_section(code, pos) else {
        return vec![NONE.to_string()];
    };
    nav.section_properties(code, &section)
        .into_iter()
        .map(|property| {
            let name = text(code, property.name);
            match property.value {
                Some(value) => {
                    format!("{} {} {}: {}", property.name, value, name, text(code, value))
                }
                None => format!("{} {} {}", property.name, NONE, name),
            }
        })
        .collect()
}

/// `item <range>`, then one stop per line.
fn render_model(model: Option<SelectionModel>) -> Vec<String> {
    let Some(model) = model else {
        return vec![NONE.to_string()];
    };
    let mut lines = vec![format!("item {}", model.range())];
    lines.extend(model.ranges.iter().map(ToString::to_string));
    lines
}

fn render_step(range: Option<Range>) -> Vec<String> {
    vec![range.map_or_else(|| NONE.to_string(), |r| r.to_string())]
}

fn render_ranges(ranges: &[Range]) -> Vec<String> {
    ranges.iter().map(ToString::to_string).collect()
}

fn text(code: &str, range: Range) -> &str {
    code.get(range.to_range()).unwrap_or("")
}

#[cfg(test)]
mod tests;
