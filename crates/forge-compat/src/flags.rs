//! Legacy flag rewriting.
//!
//! After the action is resolved, the remaining tokens are rewritten in a
//! single forward pass. Only flags in [`LEGACY_FLAGS`] are touched; every
//! other token is copied verbatim, which keeps the pass safe to run on
//! arguments that were never legacy in the first place.

use crate::error::{TranslateError, TranslateResult};

/// A single entry in the legacy flag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFlag {
    /// Flag name as written in the legacy convention, without its `-` marker.
    pub name: &'static str,
    /// Name emitted in the modern `--` form.
    pub modern: &'static str,
    /// Whether the space form consumes the following token as its value.
    pub takes_value: bool,
}

impl LegacyFlag {
    const fn value(name: &'static str) -> Self {
        Self {
            name,
            modern: name,
            takes_value: true,
        }
    }

    const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            modern: name,
            takes_value: false,
        }
    }
}

/// Flags eligible for rewriting from `-flag` to `--flag`.
///
/// The set is closed on purpose: a single-dash token absent from this table
/// is passed through untouched rather than guessed at, so unknown flags reach
/// the modern parser exactly as the user typed them.
pub const LEGACY_FLAGS: &[LegacyFlag] = &[
    LegacyFlag::value("image"),
    LegacyFlag::value("name"),
    LegacyFlag::value("fprocess"),
    LegacyFlag::value("gateway"),
    LegacyFlag::value("handler"),
    LegacyFlag::value("lang"),
    LegacyFlag::value("yaml"),
    LegacyFlag::boolean("replace"),
    LegacyFlag::boolean("no-cache"),
    LegacyFlag::boolean("squash"),
];

/// Look up a flag name in the table.
fn lookup(name: &str) -> Option<&'static LegacyFlag> {
    LEGACY_FLAGS.iter().find(|flag| flag.name == name)
}

/// Splits a `-flag=value` token into its table entry and attached value.
///
/// Returns `None` unless the token starts with a single `-` and the part
/// before the first `=` is a known legacy flag. The attached form never
/// consults `takes_value`: the user already supplied a value inline.
fn split_attached(token: &str) -> Option<(&'static LegacyFlag, &str)> {
    let rest = token.strip_prefix('-')?;
    let (name, value) = rest.split_once('=')?;
    let flag = lookup(name)?;
    Some((flag, value))
}

/// Rewrites the tokens that follow a resolved legacy action.
///
/// Tokens are scanned left to right exactly once. A known `-flag` becomes
/// `--flag`; if it takes a value, the next token is consumed and copied
/// verbatim, so values that themselves look like flags survive intact.
pub(crate) fn rewrite<S: AsRef<str>>(tokens: &[S]) -> TranslateResult<Vec<String>> {
    let mut rewritten = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();

        if let Some(flag) = token.strip_prefix('-').and_then(lookup) {
            rewritten.push(format!("--{}", flag.modern));
            if flag.takes_value {
                let Some(value) = tokens.get(i + 1) else {
                    return Err(TranslateError::missing_flag_value(flag.name));
                };
                rewritten.push(value.as_ref().to_string());
                i += 2;
                continue;
            }
            i += 1;
            continue;
        }

        if let Some((flag, value)) = split_attached(token) {
            rewritten.push(format!("--{}={value}", flag.modern));
            i += 1;
            continue;
        }

        rewritten.push(token.to_string());
        i += 1;
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rewrite_ok(tokens: &[&str]) -> Vec<String> {
        match rewrite(tokens) {
            Ok(rewritten) => rewritten,
            Err(err) => panic!("rewrite failed: {err}"),
        }
    }

    #[test]
    fn table_covers_the_legacy_surface() {
        let value_flags: Vec<_> = LEGACY_FLAGS
            .iter()
            .filter(|flag| flag.takes_value)
            .map(|flag| flag.name)
            .collect();
        let boolean_flags: Vec<_> = LEGACY_FLAGS
            .iter()
            .filter(|flag| !flag.takes_value)
            .map(|flag| flag.name)
            .collect();

        assert_eq!(
            value_flags,
            ["image", "name", "fprocess", "gateway", "handler", "lang", "yaml"]
        );
        assert_eq!(boolean_flags, ["replace", "no-cache", "squash"]);
    }

    #[test_case(&["-image", "testimage"], &["--image", "testimage"] ; "value flag space form")]
    #[test_case(&["-image=testimage"], &["--image=testimage"] ; "value flag attached form")]
    #[test_case(&["-replace"], &["--replace"] ; "boolean flag")]
    #[test_case(&["-no-cache", "-squash"], &["--no-cache", "--squash"] ; "boolean flags keep order")]
    #[test_case(&["-f", "stack.yml"], &["-f", "stack.yml"] ; "unknown short flag passes through")]
    #[test_case(&["--image", "testimage"], &["--image", "testimage"] ; "modern form is untouched")]
    #[test_case(&["positional"], &["positional"] ; "positional passes through")]
    #[test_case(&[], &[] ; "empty residual")]
    fn rewrites_tokens(tokens: &[&str], expected: &[&str]) {
        assert_eq!(rewrite_ok(tokens), expected);
    }

    #[test]
    fn value_tokens_are_never_reinterpreted() {
        // The value slot is consumed verbatim even when it looks like a flag.
        assert_eq!(
            rewrite_ok(&["-name", "-name"]),
            ["--name", "-name"]
        );
        assert_eq!(
            rewrite_ok(&["-name", "\"-name\""]),
            ["--name", "\"-name\""]
        );
    }

    #[test]
    fn attached_value_is_copied_verbatim() {
        assert_eq!(rewrite_ok(&["-name=-name"]), ["--name=-name"]);
        assert_eq!(rewrite_ok(&["-gateway=https://host:8080"]), ["--gateway=https://host:8080"]);
        assert_eq!(rewrite_ok(&["-image="]), ["--image="]);
    }

    #[test]
    fn attached_form_splits_on_first_equals_only() {
        assert_eq!(
            rewrite_ok(&["-fprocess=env KEY=VAL"]),
            ["--fprocess=env KEY=VAL"]
        );
    }

    #[test]
    fn boolean_flag_never_consumes_the_next_token() {
        assert_eq!(
            rewrite_ok(&["-replace", "-image", "testimage"]),
            ["--replace", "--image", "testimage"]
        );
    }

    #[test]
    fn attached_form_on_boolean_flag_is_still_rewritten() {
        // Shape decides: `=` means attached, regardless of takes_value.
        assert_eq!(rewrite_ok(&["-replace=true"]), ["--replace=true"]);
    }

    #[test]
    fn dangling_value_flag_is_an_error() {
        assert_eq!(
            rewrite(&["-image"]),
            Err(TranslateError::missing_flag_value("image"))
        );
        assert_eq!(
            rewrite(&["-replace", "-gateway"]),
            Err(TranslateError::missing_flag_value("gateway"))
        );
    }

    #[test]
    fn double_dash_forms_never_match_the_table() {
        // `--name=x` strips to `-name=x`, which is not a table entry.
        assert_eq!(rewrite_ok(&["--name=fn"]), ["--name=fn"]);
        assert_eq!(rewrite_ok(&["--no-cache"]), ["--no-cache"]);
    }

    #[test]
    fn bare_dash_and_empty_tokens_pass_through() {
        assert_eq!(rewrite_ok(&["-"]), ["-"]);
        assert_eq!(rewrite_ok(&[""]), [""]);
        assert_eq!(rewrite_ok(&["-="]), ["-="]);
    }
}
