//! Structured log view of a [`ConsoleError`](crate::ConsoleError).
//!
//! # Properties
//!
//! - Borrows from the error with an explicit lifetime and cannot outlive it
//! - Every rendered field has its own byte limit, so one oversized value
//!   cannot blow up a log line
//! - The message field is the template before substitution; argument text is
//!   only written by the `trusted_debug` formatter
//!
//! The view is meant to be consumed by the logging call that created it and
//! dropped right after.

use crate::{CodeCategory, ErrorCode};
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Write};

/// Byte limit for the message field.
const MAX_MESSAGE_LEN: usize = 1024;

/// Byte limit for the cause field.
const MAX_CAUSE_LEN: usize = 512;

/// Byte limit for each argument in trusted output.
#[cfg(all(feature = "trusted_debug", debug_assertions))]
const MAX_ARGUMENT_LEN: usize = 256;

/// Appended to a field that hit its limit.
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Label written in place of a code for literal-message errors.
const UNCODED_LABEL: &str = "UNCODED";

/// Structured log entry with data borrowed from a `ConsoleError`.
///
/// # Example
///
/// ```rust
/// # use console_errors::{ConsoleError, ErrorCode};
/// let err = ConsoleError::from_parts(ErrorCode::ConnectionFailure, None, ["10.0.0.1"]);
/// err.with_error_log(|log| {
///     assert_eq!(log.code(), Some(ErrorCode::ConnectionFailure));
///     assert_eq!(log.argument_count(), 1);
/// });
/// ```
pub struct ErrorLog<'a> {
    code: Option<ErrorCode>,
    template: Cow<'a, str>,
    arguments: Option<&'a [String]>,
    cause: Option<&'a (dyn Error + 'static)>,
}

impl<'a> ErrorLog<'a> {
    pub(crate) fn new(
        code: Option<ErrorCode>,
        template: Cow<'a, str>,
        arguments: Option<&'a [String]>,
        cause: Option<&'a (dyn Error + 'static)>,
    ) -> Self {
        Self {
            code,
            template,
            arguments,
            cause,
        }
    }

    /// Write the entry to `f` without materializing argument text.
    ///
    /// Format: `[CODE] category='..' message='..' args=N` followed by
    /// ` cause='..'` when a cause is attached. `message` is the unsubstituted
    /// template, or the literal text of a literal-message error.
    ///
    /// ```rust
    /// # use console_errors::{ConsoleError, ErrorCode};
    /// let err = ConsoleError::new(ErrorCode::SessionExpired);
    /// let mut line = String::new();
    /// err.error_log().write_to(&mut line).unwrap();
    /// assert_eq!(
    ///     line,
    ///     "[SESSION_EXPIRED] category='Security' message='SESSION_EXPIRED' args=-"
    /// );
    /// ```
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] category='{}' message='",
            self.code_label(),
            self.category().map_or("Uncategorized", |c| c.display_name()),
        )?;
        write_field(f, &self.template, MAX_MESSAGE_LEN)?;
        f.write_str("' args=")?;

        match self.arguments {
            Some(arguments) => write!(f, "{}", arguments.len())?,
            None => f.write_char('-')?,
        }

        if let Some(cause) = self.cause {
            f.write_str(" cause='")?;
            write_field(f, cause, MAX_CAUSE_LEN)?;
            f.write_char('\'')?;
        }

        Ok(())
    }

    /// Format including raw argument text, for trusted debugging only.
    ///
    /// Requires BOTH the `trusted_debug` feature and debug assertions.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // String's fmt::Write never fails.
        let _ = self.write_to(&mut output);

        for (index, argument) in self.arguments.unwrap_or_default().iter().enumerate() {
            let _ = write!(output, " arg{}='", index);
            let _ = write_field(&mut output, argument, MAX_ARGUMENT_LEN);
            output.push('\'');
        }

        output
    }

    /// Error code, or `None` for literal-message errors.
    #[inline]
    pub const fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Raw identifier, or `UNCODED` for literal-message errors.
    #[inline]
    pub fn code_label(&self) -> &'static str {
        self.code.map_or(UNCODED_LABEL, ErrorCode::identifier)
    }

    /// Category of the code, if any.
    #[inline]
    pub fn category(&self) -> Option<CodeCategory> {
        self.code.map(ErrorCode::category)
    }

    /// Message before argument substitution.
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Borrowed arguments. Not written by [`write_to`](Self::write_to).
    #[inline]
    pub const fn arguments(&self) -> Option<&'a [String]> {
        self.arguments
    }

    /// Number of arguments; zero when absent.
    #[inline]
    pub fn argument_count(&self) -> usize {
        self.arguments.map_or(0, <[String]>::len)
    }

    /// Borrowed cause, if any.
    #[inline]
    pub const fn cause(&self) -> Option<&'a (dyn Error + 'static)> {
        self.cause
    }
}

impl fmt::Display for ErrorLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Debug for ErrorLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLog")
            .field("code", &self.code)
            .field("template", &self.template)
            .field("arguments", &self.arguments.map(<[String]>::len))
            .field("cause", &self.cause.map(|_| "<PRESENT>"))
            .finish()
    }
}

/// Write `value` through a [`FieldWriter`] capped at `limit` bytes.
fn write_field<W, V>(out: &mut W, value: &V, limit: usize) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    V: fmt::Display + ?Sized,
{
    let mut field = FieldWriter::new(out, limit);
    write!(field, "{}", value)?;
    field.finish()
}

/// `fmt::Write` adapter that passes through at most `limit` bytes.
///
/// Cuts at a char boundary and drops everything after the cut. `finish`
/// appends [`TRUNCATION_INDICATOR`] when anything was dropped, so the field
/// never takes more than `limit + TRUNCATION_INDICATOR.len()` bytes.
struct FieldWriter<'w, W: ?Sized> {
    out: &'w mut W,
    remaining: usize,
    truncated: bool,
}

impl<'w, W: fmt::Write + ?Sized> FieldWriter<'w, W> {
    fn new(out: &'w mut W, limit: usize) -> Self {
        Self {
            out,
            remaining: limit,
            truncated: false,
        }
    }

    fn finish(self) -> fmt::Result {
        if self.truncated {
            self.out.write_str(TRUNCATION_INDICATOR)?;
        }
        Ok(())
    }
}

impl<W: fmt::Write + ?Sized> fmt::Write for FieldWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        if s.len() <= self.remaining {
            self.remaining -= s.len();
            return self.out.write_str(s);
        }

        // Last char boundary at or before the limit
        let mut end = self.remaining;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.remaining = 0;
        self.truncated = true;
        self.out.write_str(&s[..end])
    }
}
