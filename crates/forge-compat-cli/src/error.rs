//! Error types for the compat shim.

use thiserror::Error;

use forge_compat::TranslateError;

/// Errors the shim can hit while rewriting and printing an invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// The invocation opted into the legacy convention but broke it.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// Writing the rewritten tokens failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
