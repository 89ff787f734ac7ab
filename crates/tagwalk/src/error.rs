use std::path::PathBuf;

use tagwalk_nav::{ParseDirectionError, RangeError, UnknownSyntax};
use thiserror::Error;

/// Everything that can stop a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid position `{0}`, expected `<offset>` or `<start>..<end>`")]
    InvalidPosition(String),

    #[error("document too large: {0}")]
    DocumentTooLarge(#[source] RangeError),

    #[error("position {pos} is past the end of the document ({len} bytes)")]
    PositionOutOfBounds { pos: u32, len: u32 },

    #[error("`{command}` is not available for {syntax} documents")]
    Unsupported {
        command: &'static str,
        syntax: &'static str,
    },

    #[error(transparent)]
    Syntax(#[from] UnknownSyntax),

    #[error(transparent)]
    Direction(#[from] ParseDirectionError),
}
