//! Error types for legacy invocation translation.
//!
//! Translation is conservative: anything it does not recognize passes through
//! untouched, so errors only arise from invocations that have unambiguously
//! opted into the legacy convention and then broken its contract.

use thiserror::Error;

/// Result type alias for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors that can occur while translating a legacy invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// `-action` was present but no value accompanied it
    #[error("the -action flag requires a value: deploy, build or delete")]
    MissingActionValue,

    /// The `-action` value is not in the legacy action table
    #[error("unknown legacy action: {0}")]
    UnknownAction(String),

    /// A value-taking legacy flag was the final token
    #[error("the -{0} flag requires a value")]
    MissingFlagValue(String),
}

impl TranslateError {
    /// Creates an unknown action error for an unrecognized `-action` value.
    #[must_use]
    pub fn unknown_action(action: impl std::fmt::Display) -> Self {
        Self::UnknownAction(action.to_string())
    }

    /// Creates a missing value error for a value-taking legacy flag.
    #[must_use]
    pub fn missing_flag_value(flag: impl std::fmt::Display) -> Self {
        Self::MissingFlagValue(flag.to_string())
    }
}
