//! Command-line configuration.
//!
//! Arguments are `<command> <file> <position> [options]`, where the
//! position is a byte offset or, for `step`, a `<start>..<end>` selection.

use std::path::Path;
use std::str::FromStr;

use tagwalk_nav::{Direction, Range, ScanOptions, Syntax};

use crate::CliError;

/// The navigator operation to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Enclosing tag or CSS section.
    Context,
    /// Selection stops of the next or previous item.
    Select,
    /// The range that follows a selection.
    Step,
    /// Balanced regions around the position.
    Balance,
    /// Declarations of the enclosing CSS section.
    Properties,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Context => "context",
            Command::Select => "select",
            Command::Step => "step",
            Command::Balance => "balance",
            Command::Properties => "properties",
        }
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "context" => Ok(Command::Context),
            "select" => Ok(Command::Select),
            "step" => Ok(Command::Step),
            "balance" => Ok(Command::Balance),
            "properties" => Ok(Command::Properties),
            _ => Err(CliError::UnknownCommand(s.to_string())),
        }
    }
}

/// One parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    /// Document path; `-` for standard input.
    pub path: String,
    /// Caret (empty range) or selection the command starts from.
    pub selection: Range,
    /// Syntax given with `--syntax`, `--css` or `--xml`.
    pub syntax: Option<Syntax>,
    /// `--prev`: walk backwards.
    pub prev: bool,
    pub direction: Direction,
}

impl CliConfig {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut syntax = None;
        let mut prev = false;
        let mut direction = Direction::Outward;

        for arg in args {
            match arg.as_str() {
                "--css" => syntax = Some(Syntax::Css),
                "--xml" => syntax = Some(Syntax::Xml),
                "--prev" => prev = true,
                "--inward" => direction = Direction::Inward,
                "--outward" => direction = Direction::Outward,
                _ => {
                    if let Some(name) = arg.strip_prefix("--syntax=") {
                        syntax = Some(name.parse::<Syntax>()?);
                    } else if let Some(value) = arg.strip_prefix("--direction=") {
                        direction = value.parse::<Direction>()?;
                    } else if arg.starts_with("--") {
                        return Err(CliError::UnknownFlag(arg.clone()));
                    } else {
                        positional.push(arg.as_str());
                    }
                }
            }
        }

        let mut positional = positional.into_iter();
        let command = positional
            .next()
            .ok_or(CliError::MissingArgument("command"))?
            .parse::<Command>()?;
        let path = positional
            .next()
            .ok_or(CliError::MissingArgument("file"))?
            .to_string();
        let selection = parse_selection(
            positional
                .next()
                .ok_or(CliError::MissingArgument("position"))?,
        )?;
        if let Some(extra) = positional.next() {
            return Err(CliError::UnexpectedArgument(extra.to_string()));
        }

        Ok(CliConfig {
            command,
            path,
            selection,
            syntax,
            prev,
            direction,
        })
    }

    /// The caret position: the start of the selection.
    pub fn pos(&self) -> u32 {
        self.selection.start
    }

    /// Explicit syntax, else the one implied by the file extension, else HTML.
    pub fn resolved_syntax(&self) -> Syntax {
        self.syntax.unwrap_or_else(|| {
            Path::new(&self.path)
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(Syntax::from_extension)
                .unwrap_or(Syntax::Html)
        })
    }

    pub fn scan_options(&self) -> ScanOptions {
        self.resolved_syntax().scan_options()
    }
}

/// `<offset>` becomes a caret, `<start>..<end>` a selection.
fn parse_selection(text: &str) -> Result<Range, CliError> {
    let invalid = || CliError::InvalidPosition(text.to_string());
    let offset = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());

    match text.split_once("..") {
        Some((start, end)) => {
            let (start, end) = (offset(start)?, offset(end)?);
            if start > end {
                return Err(invalid());
            }
            Ok(Range::new(start, end))
        }
        None => {
            let pos = offset(text)?;
            Ok(Range::new(pos, pos))
        }
    }
}

#[cfg(test)]
mod tests;
