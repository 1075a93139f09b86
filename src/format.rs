//! Positional placeholder substitution for message templates.
//!
//! A template contains tokens of the form `{index}`. Each token is replaced by
//! the text of the argument at that position:
//!
//! ```rust
//! use console_errors::format_message;
//!
//! let text = format_message("Value {0} exceeds limit {1}", Some(&["42", "10"][..]));
//! assert_eq!(text, "Value 42 exceeds limit 10");
//! ```
//!
//! # Token Grammar
//!
//! A placeholder is exactly `{`, the decimal index without sign, padding or
//! leading zeros, and `}`. Anything else between braces is plain text. A
//! placeholder whose index has no argument is left untouched; formatting never
//! fails.
//!
//! # Substitution Policy
//!
//! [`format_message`] scans the template once. Text coming from an argument is
//! copied as-is and never rescanned, so an argument such as `"{0}"` cannot
//! feed back into substitution and the result is bounded by
//! `template + occurrences * argument length`.
//!
//! [`format_fixed_point`] keeps the older "replace until no occurrence is left"
//! behavior for callers that depend on arguments expanding into later
//! arguments. It is capped per index in passes and overall in output size,
//! and reports a [`FormatError`] instead of looping or growing without end.

use std::fmt::{self, Write};

/// Default pass budget per index for [`format_fixed_point`].
pub const DEFAULT_MAX_PASSES: usize = 16;

/// Substitute positional placeholders in a single pass over `template`.
///
/// - `None` arguments: the template is returned unchanged.
/// - In-range placeholders are replaced by the argument's `Display` text,
///   every occurrence.
/// - Out-of-range placeholders and non-placeholder braces stay literal.
pub fn format_message<T: fmt::Display>(template: &str, arguments: Option<&[T]>) -> String {
    let Some(arguments) = arguments else {
        return template.to_owned();
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match placeholder_at(candidate, arguments.len()) {
            Some((index, token_len)) => {
                // Writing into a String only fails if the argument's Display does.
                let _ = write!(out, "{}", arguments[index]);
                rest = &candidate[token_len..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Substitute placeholders index by index, repeating until none remain.
///
/// For each index in ascending order every occurrence of its token is replaced,
/// and the replacement is repeated while the token is still present. At most
/// `max_passes` passes are spent per index; `0` means any remaining token is
/// an error.
///
/// The text may never grow past the single-pass bound,
/// `template.len() + template.len() / 3 * longest_argument`.
///
/// # Errors
///
/// - [`FormatError::Diverged`] when an index still has occurrences after
///   `max_passes` passes. An argument containing its own token always
///   diverges and is reported before any pass runs.
/// - [`FormatError::TooLong`] when a pass would push the text past the bound,
///   which happens when arguments expand into several later tokens.
pub fn format_fixed_point<T: fmt::Display>(
    template: &str,
    arguments: Option<&[T]>,
    max_passes: usize,
) -> Result<String, FormatError> {
    let Some(arguments) = arguments else {
        return Ok(template.to_owned());
    };

    let replacements: Vec<String> = arguments.iter().map(ToString::to_string).collect();
    let longest = replacements.iter().map(String::len).max().unwrap_or(0);
    // Every token is at least three bytes long.
    let limit = template
        .len()
        .saturating_add((template.len() / 3).saturating_mul(longest));

    let mut text = template.to_owned();
    for (index, replacement) in replacements.iter().enumerate() {
        let token = format!("{{{index}}}");
        if !text.contains(&token) {
            continue;
        }
        if replacement.contains(&token) {
            return Err(FormatError::Diverged {
                index,
                passes: max_passes,
            });
        }

        let mut passes = 0;
        while text.contains(&token) {
            if passes == max_passes {
                return Err(FormatError::Diverged { index, passes });
            }
            let occurrences = text.matches(&token).count();
            let grown = text.len() - occurrences * token.len() + occurrences * replacement.len();
            if grown > limit {
                return Err(FormatError::TooLong { index, limit });
            }
            text = text.replace(&token, replacement);
            passes += 1;
        }
    }
    Ok(text)
}

/// Parse a canonical `{index}` token at the start of `s`.
///
/// Returns the index and the token's byte length when the index is below `len`.
fn placeholder_at(s: &str, len: usize) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let digits = bytes
        .iter()
        .skip(1)
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 || bytes.get(1 + digits) != Some(&b'}') {
        return None;
    }
    if digits > 1 && bytes[1] == b'0' {
        return None;
    }

    // Overflowing indices can never be in range.
    let index: usize = s[1..1 + digits].parse().ok()?;
    (index < len).then_some((index, digits + 2))
}

// ============================================================================
// Policy
// ============================================================================

/// Selects how placeholders are substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubstitutionPolicy {
    /// One scan over the template; argument text is never rescanned.
    #[default]
    SinglePass,
    /// Repeat per index until stable, capped at `max_passes`.
    FixedPoint {
        /// Pass budget per index.
        max_passes: usize,
    },
}

impl SubstitutionPolicy {
    /// Fixed-point substitution with [`DEFAULT_MAX_PASSES`].
    pub const fn fixed_point() -> Self {
        Self::FixedPoint {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Format `template` under this policy.
    ///
    /// # Errors
    ///
    /// Only the fixed-point policy can fail, see [`format_fixed_point`].
    pub fn apply<T: fmt::Display>(
        self,
        template: &str,
        arguments: Option<&[T]>,
    ) -> Result<String, FormatError> {
        match self {
            Self::SinglePass => Ok(format_message(template, arguments)),
            Self::FixedPoint { max_passes } => format_fixed_point(template, arguments, max_passes),
        }
    }
}

/// Failure of capped fixed-point substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The placeholder for `index` was still present after `passes` passes.
    Diverged {
        /// Argument position whose token kept reappearing.
        index: usize,
        /// Passes spent before giving up.
        passes: usize,
    },
    /// Substituting `index` would grow the text past `limit` bytes.
    TooLong {
        /// Argument position being substituted.
        index: usize,
        /// Byte bound derived from the template and the longest argument.
        limit: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diverged { index, passes } => write!(
                f,
                "Placeholder {{{}}} still present after {} substitution passes",
                index, passes
            ),
            Self::TooLong { index, limit } => write!(
                f,
                "Substituting placeholder {{{}}} exceeds {} bytes",
                index, limit
            ),
        }
    }
}

impl std::error::Error for FormatError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(template: &str, args: &[&str]) -> String {
        format_message(template, Some(args))
    }

    #[test]
    fn substitutes_in_order() {
        assert_eq!(
            fmt("Value {0} exceeds limit {1}", &["42", "10"]),
            "Value 42 exceeds limit 10"
        );
    }

    #[test]
    fn absent_arguments_return_template() {
        let template = "Value {0} exceeds limit {1}";
        assert_eq!(format_message::<&str>(template, None), template);
    }

    #[test]
    fn empty_arguments_leave_placeholders() {
        assert_eq!(fmt("missing {0}", &[]), "missing {0}");
    }

    #[test]
    fn no_placeholders_unchanged() {
        assert_eq!(fmt("No placeholders here", &["x"]), "No placeholders here");
    }

    #[test]
    fn repeated_placeholder_replaced_everywhere() {
        assert_eq!(fmt("{0}-{0}-{0}", &["a"]), "a-a-a");
        assert_eq!(fmt("{1}{0}{1}", &["x", "y"]), "yxy");
    }

    #[test]
    fn out_of_range_placeholder_left_literal() {
        assert_eq!(fmt("{0} and {2}", &["a", "b"]), "a and {2}");
    }

    #[test]
    fn non_placeholder_braces_left_literal() {
        assert_eq!(fmt("{} {a} { 0} {0 } {", &["x"]), "{} {a} { 0} {0 } {");
        assert_eq!(fmt("{01}", &["x", "y"]), "{01}");
        assert_eq!(fmt("{-1}", &["x"]), "{-1}");
    }

    #[test]
    fn nested_braces_around_placeholder() {
        assert_eq!(fmt("{{0}}", &["x"]), "{x}");
    }

    #[test]
    fn overflowing_index_left_literal() {
        let template = "{184467440737095516160000}";
        assert_eq!(fmt(template, &["x"]), template);
    }

    #[test]
    fn self_referencing_argument_is_not_rescanned() {
        assert_eq!(fmt("{0}", &["{0}"]), "{0}");
        assert_eq!(fmt("{0}", &["{1}", "b"]), "{1}");
    }

    #[test]
    fn non_ascii_text_survives() {
        assert_eq!(fmt("Ωmega {0} ✓", &["дата"]), "Ωmega дата ✓");
    }

    #[test]
    fn display_arguments() {
        assert_eq!(
            format_message("{0} of {1}", Some(&[3, 7][..])),
            "3 of 7"
        );
    }

    #[test]
    fn fixed_point_matches_single_pass_for_plain_arguments() {
        let args = ["42", "10"];
        assert_eq!(
            format_fixed_point("Value {0} exceeds limit {1}", Some(&args[..]), DEFAULT_MAX_PASSES),
            Ok("Value 42 exceeds limit 10".to_owned())
        );
    }

    #[test]
    fn fixed_point_expands_into_later_arguments() {
        let args = ["{1}", "b"];
        assert_eq!(
            format_fixed_point("{0}", Some(&args[..]), DEFAULT_MAX_PASSES),
            Ok("b".to_owned())
        );
    }

    #[test]
    fn fixed_point_reports_divergence() {
        let args = ["{0}"];
        assert_eq!(
            format_fixed_point("{0}", Some(&args[..]), 4),
            Err(FormatError::Diverged {
                index: 0,
                passes: 4
            })
        );
    }

    #[test]
    fn fixed_point_self_multiplying_argument_fails_fast() {
        let args = ["{0}{0}{0}{0}"];
        assert_eq!(
            format_fixed_point("{0}", Some(&args[..]), DEFAULT_MAX_PASSES),
            Err(FormatError::Diverged {
                index: 0,
                passes: DEFAULT_MAX_PASSES
            })
        );
    }

    #[test]
    fn fixed_point_growth_is_bounded() {
        // Each argument doubles into the next token.
        let args = ["{1}{1}", "{2}{2}", "cc"];
        assert_eq!(
            format_fixed_point("{0}", Some(&args[..]), DEFAULT_MAX_PASSES),
            Err(FormatError::TooLong { index: 1, limit: 9 })
        );
    }

    #[test]
    fn fixed_point_handles_many_occurrences() {
        let args = ["abcdef"];
        assert_eq!(
            format_fixed_point("{0}{0}{0}", Some(&args[..]), 1),
            Ok("abcdef".repeat(3))
        );
    }

    #[test]
    fn fixed_point_zero_budget() {
        let args = ["a"];
        assert!(format_fixed_point("{0}", Some(&args[..]), 0).is_err());
        assert_eq!(
            format_fixed_point("plain", Some(&args[..]), 0),
            Ok("plain".to_owned())
        );
    }

    #[test]
    fn policy_dispatch() {
        let args = ["{0}"];
        assert_eq!(
            SubstitutionPolicy::default().apply("{0}", Some(&args[..])),
            Ok("{0}".to_owned())
        );
        assert!(SubstitutionPolicy::fixed_point()
            .apply("{0}", Some(&args[..]))
            .is_err());
    }

    #[test]
    fn divergence_message_names_placeholder() {
        let err = FormatError::Diverged { index: 3, passes: 16 };
        assert_eq!(
            err.to_string(),
            "Placeholder {3} still present after 16 substitution passes"
        );

        let err = FormatError::TooLong { index: 1, limit: 9 };
        assert_eq!(err.to_string(), "Substituting placeholder {1} exceeds 9 bytes");
    }
}
