//! # forge-compat-cli
//!
//! Shim binary around [`forge_compat`]: it takes its own argument vector,
//! rewrites the legacy calling convention into modern subcommand form and
//! prints the resulting tokens, one per line.
//!
//! Wrapper scripts use it to migrate saved invocations without linking the
//! full CLI:
//!
//! ```text
//! $ forge-compat -action deploy -image webhook:0.2
//! deploy
//! --image
//! webhook:0.2
//! ```
//!
//! The program name (token 0) is not echoed back; callers splice the output
//! after their own binary path. Tokens are newline separated, so a token
//! that itself contains a newline cannot round-trip through this shim.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

pub use error::CliError;

use std::io::Write;

use tracing::{debug, warn};

use forge_compat::{is_legacy, translate};

/// Translates `args` and writes the resulting tokens to `out`.
///
/// Token 0 is treated as the program name and omitted from the output;
/// every other token is written on its own line, in order. Nothing is
/// written if translation fails.
///
/// # Errors
///
/// Returns an error if the invocation breaks the legacy convention or if
/// writing to `out` fails.
pub fn run<W: Write>(args: &[String], out: &mut W) -> Result<(), CliError> {
    if is_legacy(args) {
        warn!("legacy flag syntax is deprecated, use subcommands instead");
    }

    let translated = translate(args)?;
    debug!("writing {} rewritten tokens", translated.len().saturating_sub(1));

    for token in translated.iter().skip(1) {
        writeln!(out, "{token}")?;
    }
    Ok(())
}
