//! Command-line front end for `tagwalk_nav`.
//!
//! The binary parses its arguments into a [`CliConfig`], reads the document
//! and hands both to [`commands::execute`], which renders the navigator's
//! answer as plain text lines.

pub mod commands;
pub mod config;
mod error;

use std::path::Path;

pub use config::{CliConfig, Command};
pub use error::CliError;

/// Initialize the tracing subscriber once per process.
///
/// Only installs a subscriber when `RUST_LOG` is set, so the default run
/// prints nothing but command output.
pub fn init_tracing() {
    use std::sync::Once;
    static TRACING_INIT: Once = Once::new();

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Read the document named by `path`; `-` reads standard input.
pub fn read_source(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Io {
        path: Path::new(path).to_path_buf(),
        source,
    })
}

/// Run one CLI invocation end to end and return its output lines.
pub fn run(config: &CliConfig) -> Result<Vec<String>, CliError> {
    let code = read_source(&config.path)?;
    commands::execute(config, &code)
}
