//! Legacy invocation translation for the Forge CLI.
//!
//! Early releases of the CLI selected their operation with a leading
//! `-action` flag (`forge -action deploy -image img`); modern releases use
//! subcommands (`forge deploy --image img`). This crate rewrites argument
//! vectors from the old convention into the new one so saved scripts and CI
//! pipelines written against old releases keep working unchanged.
//!
//! Translation is pure: it maps an argument vector to an argument vector and
//! performs no I/O. The intended call site is process startup, before the
//! arguments reach the real parser.
//!
//! # Legacy Convention
//!
//! - **Markers**: token 1 is `-action`, `-action=<value>` or `-version`.
//!   Anything else means the invocation is already modern and is passed
//!   through byte for byte.
//! - **Actions**: `deploy`, `build` and `delete` (which maps to the
//!   `remove` subcommand). The set is closed; see [`LEGACY_ACTIONS`].
//! - **Flags**: a fixed table of single-dash flags is rewritten to their
//!   `--` forms, space form and `=` form alike; see [`LEGACY_FLAGS`].
//!   Unknown tokens are copied verbatim.
//!
//! # Example
//!
//! ```
//! use forge_compat::translate;
//!
//! let legacy = ["forge", "-action", "deploy", "-image", "webhook:0.2", "-replace"];
//! let modern = translate(&legacy)?;
//! assert_eq!(
//!     modern,
//!     ["forge", "deploy", "--image", "webhook:0.2", "--replace"]
//! );
//!
//! // Modern invocations come back unchanged, so the rewrite can run
//! // unconditionally.
//! let args = ["forge", "deploy", "--image", "webhook:0.2"];
//! assert_eq!(translate(&args)?, args);
//! # Ok::<(), forge_compat::TranslateError>(())
//! ```
//!
//! # Guarantees
//!
//! - The program name (token 0) is never inspected or rewritten.
//! - Applying [`translate`] to its own output returns it unchanged.
//! - Flag values are copied verbatim, even when they look like flags.
//! - Relative order of all surviving tokens is preserved.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod actions;
mod error;
mod flags;
mod translate;

pub use actions::{ActionMapping, LEGACY_ACTIONS};
pub use error::{TranslateError, TranslateResult};
pub use flags::{LegacyFlag, LEGACY_FLAGS};
pub use translate::{is_legacy, translate};
