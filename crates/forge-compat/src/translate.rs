//! Invocation classification and the translation pipeline.
//!
//! This module decides whether an argument vector uses the legacy calling
//! convention and, when it does, rewrites it token by token into the modern
//! subcommand grammar.
//!
//! ## Recognized Shapes
//!
//! - `forge -action deploy -image img` - legacy action, space-form flags
//! - `forge -action=deploy -image=img` - legacy action, attached-form flags
//! - `forge -version` - legacy version query
//! - `forge deploy --image img` - already modern, passed through untouched
//!
//! Classification looks at exactly one token: the one right after the
//! program name. Nothing else can opt an invocation into translation, so
//! modern invocations are never rewritten, no matter what their later
//! arguments look like.

use tracing::debug;

use crate::actions;
use crate::error::TranslateResult;
use crate::flags;

/// Calling convention detected for an argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Convention {
    /// No legacy marker; the invocation is already modern.
    Modern,
    /// Leading `-version` marker.
    LegacyVersion,
    /// Leading `-action` marker, bare or with an attached value.
    LegacyAction,
}

/// Classifies an argument vector by the token after the program name.
///
/// Token 0 is the program name and is never inspected. `-version` only
/// counts in its exact form; `-version=x` is left for the modern parser
/// to reject.
fn classify<S: AsRef<str>>(args: &[S]) -> Convention {
    let Some(first) = args.get(1) else {
        return Convention::Modern;
    };
    match first.as_ref() {
        "-version" => Convention::LegacyVersion,
        token if token == "-action" || token.starts_with("-action=") => Convention::LegacyAction,
        _ => Convention::Modern,
    }
}

/// Returns `true` if the argument vector uses the legacy calling convention.
///
/// Useful for emitting a deprecation notice before handing the rewritten
/// vector to the modern parser.
///
/// # Examples
///
/// ```rust
/// use forge_compat::is_legacy;
///
/// assert!(is_legacy(&["forge", "-action", "deploy"]));
/// assert!(is_legacy(&["forge", "-version"]));
/// assert!(!is_legacy(&["forge", "deploy", "--image", "img"]));
/// ```
#[must_use]
pub fn is_legacy<S: AsRef<str>>(args: &[S]) -> bool {
    classify(args) != Convention::Modern
}

/// Translates a legacy argument vector into the modern subcommand grammar.
///
/// The input is a full argument vector as handed to the process, program
/// name included. Modern input comes back unchanged, so the function is
/// safe to apply unconditionally before argument parsing; applying it to
/// its own output changes nothing.
///
/// # Examples
///
/// ```rust
/// use forge_compat::translate;
///
/// let legacy = ["forge", "-action", "delete", "-name", "fnname"];
/// let modern = translate(&legacy)?;
/// assert_eq!(modern, ["forge", "remove", "--name", "fnname"]);
///
/// // Already-modern invocations pass through untouched.
/// let args = ["forge", "deploy", "--image", "img"];
/// assert_eq!(translate(&args)?, args);
/// # Ok::<(), forge_compat::TranslateError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `-action` has no value ([`MissingActionValue`])
/// - the `-action` value is not deploy, build or delete ([`UnknownAction`])
/// - a value-taking legacy flag is the final token ([`MissingFlagValue`])
///
/// [`MissingActionValue`]: crate::TranslateError::MissingActionValue
/// [`UnknownAction`]: crate::TranslateError::UnknownAction
/// [`MissingFlagValue`]: crate::TranslateError::MissingFlagValue
pub fn translate<S: AsRef<str>>(args: &[S]) -> TranslateResult<Vec<String>> {
    match classify(args) {
        Convention::Modern => {
            debug!("no legacy markers detected, passing invocation through");
            Ok(args.iter().map(|token| token.as_ref().to_string()).collect())
        }
        Convention::LegacyVersion => {
            // Everything after the marker is discarded; the marker itself
            // ignored trailing arguments too.
            debug!("rewrote legacy -version marker to the version subcommand");
            Ok(vec![args[0].as_ref().to_string(), "version".to_string()])
        }
        Convention::LegacyAction => {
            let (subcommand, residual) = actions::resolve(args[1].as_ref(), &args[2..])?;
            debug!("resolved legacy action to the {} subcommand", subcommand);

            let mut translated = Vec::with_capacity(args.len());
            translated.push(args[0].as_ref().to_string());
            translated.push(subcommand.to_string());
            translated.extend(flags::rewrite(residual)?);
            Ok(translated)
        }
    }
}
