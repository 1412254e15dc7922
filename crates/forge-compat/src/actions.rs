//! Legacy action resolution.
//!
//! Early releases of the CLI selected the operation with a leading `-action`
//! flag; modern releases use subcommands. The mapping between the two lives
//! in a fixed table so the supported surface can be audited at a glance.
//! Adding new actions requires explicit code changes.

use crate::error::{TranslateError, TranslateResult};

/// A single entry in the legacy action table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMapping {
    /// Value accepted by the legacy `-action` flag.
    pub legacy: &'static str,
    /// Modern subcommand the action translates to.
    pub modern: &'static str,
}

/// Actions the legacy convention is allowed to request.
///
/// This is a closed set: any `-action` value outside this table is rejected
/// with [`TranslateError::UnknownAction`] rather than passed through, so a
/// typo fails loudly instead of reaching the modern parser as a mystery
/// positional argument.
pub const LEGACY_ACTIONS: &[ActionMapping] = &[
    ActionMapping {
        legacy: "deploy",
        modern: "deploy",
    },
    ActionMapping {
        legacy: "build",
        modern: "build",
    },
    ActionMapping {
        legacy: "delete",
        modern: "remove",
    },
];

/// Look up a legacy action value in the table.
fn lookup(action: &str) -> Option<&'static str> {
    LEGACY_ACTIONS
        .iter()
        .find(|mapping| mapping.legacy == action)
        .map(|mapping| mapping.modern)
}

/// Resolves a leading `-action` marker to its modern subcommand.
///
/// `marker` is the token at index 1 (either `-action` or `-action=value`),
/// `rest` is every token after it. Returns the subcommand together with the
/// tokens left for flag rewriting.
///
/// The space form consumes the following token as the action value, whatever
/// it looks like; a value that resembles a flag was still given as the value
/// and is judged against the table like any other.
pub(crate) fn resolve<'a, S: AsRef<str>>(
    marker: &str,
    rest: &'a [S],
) -> TranslateResult<(&'static str, &'a [S])> {
    if let Some(attached) = marker.strip_prefix("-action=") {
        if attached.is_empty() {
            return Err(TranslateError::MissingActionValue);
        }
        let subcommand = lookup(attached).ok_or_else(|| TranslateError::unknown_action(attached))?;
        return Ok((subcommand, rest));
    }

    // Bare `-action`: the value is the next token, if there is one.
    let Some((value, residual)) = rest.split_first() else {
        return Err(TranslateError::MissingActionValue);
    };
    let value = value.as_ref();
    let subcommand = lookup(value).ok_or_else(|| TranslateError::unknown_action(value))?;
    Ok((subcommand, residual))
}
