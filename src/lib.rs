//! # Console Errors
//!
//! Coded error values for the management console client.
//!
//! ## Design
//!
//! 1. **Every failure carries a code** from the closed [`ErrorCode`] set
//! 2. **Arguments are positional text**, substituted into `{index}` placeholders
//! 3. **Templates are injected**, never hardcoded in the error value
//! 4. **Internal errors can carry literal text** without a dedicated template
//! 5. **Argument text is zeroized** when the error drops
//!
//! ## Message Derivation
//!
//! - literal-message errors render their text verbatim
//! - `INTERNAL_ERROR` with exactly one argument renders that argument verbatim
//! - everything else renders the code's template with its arguments, where the
//!   template comes from a [`TemplateResolver`] and falls back to the raw
//!   identifier
//!
//! ## Quick Start
//!
//! ```rust
//! use console_errors::{Catalog, ConsoleError, ErrorCode, Result};
//!
//! fn rename(name: &str, taken: &[&str]) -> Result<()> {
//!     if taken.contains(&name) {
//!         return Err(ConsoleError::from_parts(ErrorCode::DuplicateName, None, [name]));
//!     }
//!     Ok(())
//! }
//!
//! let err = rename("eth0", &["eth0"]).unwrap_err();
//!
//! // No resolver: the raw identifier.
//! assert_eq!(err.message_with(&console_errors::IdentifierResolver), "DUPLICATE_NAME");
//!
//! // With the bundled catalog: the substituted template.
//! assert_eq!(
//!     err.message_with(&Catalog::english()),
//!     "An entry named \"eth0\" already exists."
//! );
//! ```
//!
//! ## Wrapping Lower-Level Failures
//!
//! ```rust
//! use console_errors::{ConsoleError, ErrorCode};
//! use std::error::Error;
//! use std::io;
//!
//! let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
//! let err = ConsoleError::internal_error_with_cause(io_err, "disk full");
//!
//! assert_eq!(err.code(), Some(ErrorCode::InternalError));
//! assert_eq!(err.message(), "disk full");
//! assert!(err.source().is_some());
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: [`ErrorLog::format_for_trusted_debug`] (debug builds only),
//!   which writes raw argument text

#![warn(missing_docs)]
#![warn(clippy::all)]

use smallvec::SmallVec;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::result;
use zeroize::Zeroize;

pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod format;
pub mod logging;
pub mod resolver;

pub use codes::*;
pub use definitions::*;
pub use format::*;
pub use logging::*;
pub use resolver::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, ConsoleError>;

/// Owned cause attached to a [`ConsoleError`].
pub type Cause = Box<dyn Error + Send + Sync>;

/// Argument storage. Most codes take zero to two arguments.
type Arguments = SmallVec<[String; 4]>;

/// Where the message of a [`ConsoleError`] comes from.
enum Origin {
    Coded(ErrorCode),
    Message(String),
}

/// Console error value.
///
/// # Key Properties
///
/// - Immutable once constructed
/// - Absent arguments (`None`) are distinct from an empty list
/// - The cause is owned and reachable through [`Error::source`]
/// - Owned argument and message text is zeroized on drop
/// - `Debug` shows the code and argument count, never argument text
#[must_use = "errors should be handled or reported"]
pub struct ConsoleError {
    origin: Origin,
    cause: Option<Cause>,
    arguments: Option<Arguments>,
}

impl ConsoleError {
    /// Error with a code and no arguments.
    #[inline]
    pub fn new(code: ErrorCode) -> Self {
        Self {
            origin: Origin::Coded(code),
            cause: None,
            arguments: None,
        }
    }

    /// Error with a code and an underlying cause.
    #[inline]
    pub fn from_cause(code: ErrorCode, cause: impl Into<Cause>) -> Self {
        Self {
            origin: Origin::Coded(code),
            cause: Some(cause.into()),
            arguments: None,
        }
    }

    /// Error with a code, an optional cause and positional arguments.
    ///
    /// The argument list is always present afterwards, even when empty.
    pub fn from_parts<I, S>(code: ErrorCode, cause: Option<Cause>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origin: Origin::Coded(code),
            cause,
            arguments: Some(arguments.into_iter().map(Into::into).collect()),
        }
    }

    /// Error carrying a literal message and no code.
    ///
    /// [`code`](Self::code) returns `None` and the message is `text` verbatim.
    #[inline]
    pub fn from_message(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Message(text.into()),
            cause: None,
            arguments: None,
        }
    }

    /// `INTERNAL_ERROR` whose message is `message` verbatim.
    #[inline]
    pub fn internal_error(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::from_parts(ErrorCode::InternalError, None, [message])
    }

    /// `INTERNAL_ERROR` wrapping `cause`, whose message is `message` verbatim.
    #[inline]
    pub fn internal_error_with_cause(cause: impl Into<Cause>, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::from_parts(ErrorCode::InternalError, Some(cause.into()), [message])
    }

    /// Error code, or `None` for literal-message errors.
    #[inline]
    pub fn code(&self) -> Option<ErrorCode> {
        match self.origin {
            Origin::Coded(code) => Some(code),
            Origin::Message(_) => None,
        }
    }

    /// Category of the code, or `None` for literal-message errors.
    #[inline]
    pub fn category(&self) -> Option<CodeCategory> {
        self.code().map(ErrorCode::category)
    }

    /// Positional arguments, or `None` if none were supplied.
    #[inline]
    pub fn arguments(&self) -> Option<&[String]> {
        self.arguments.as_deref()
    }

    /// The owned cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Message derived with the process-wide resolver.
    ///
    /// Without an installed resolver, coded errors render their raw identifier
    /// with arguments substituted.
    pub fn message(&self) -> String {
        match resolver::installed_resolver() {
            Some(resolver) => self.message_with(resolver.as_ref()),
            None => self.message_with(&IdentifierResolver),
        }
    }

    /// Same as [`message`](Self::message).
    #[inline]
    pub fn localized_message(&self) -> String {
        self.message()
    }

    /// Message derived with an explicit resolver.
    pub fn message_with(&self, resolver: &dyn TemplateResolver) -> String {
        let code = match &self.origin {
            Origin::Message(text) => return text.clone(),
            Origin::Coded(code) => *code,
        };

        if code.is_internal_error() {
            if let Some([only]) = self.arguments() {
                return only.clone();
            }
        }

        let template = resolve_template(resolver, code);
        format_message(&template, self.arguments())
    }

    /// Structured log view borrowing from this error.
    ///
    /// The view carries the template from the installed resolver without
    /// substituting arguments. It cannot outlive the error; consume it
    /// immediately.
    ///
    /// ```rust
    /// # use console_errors::{ConsoleError, ErrorCode};
    /// let err = ConsoleError::from_parts(ErrorCode::NotFound, None, ["wlan0"]);
    /// let mut line = String::new();
    /// err.error_log().write_to(&mut line).unwrap();
    /// assert!(line.starts_with("[NOT_FOUND]"));
    /// ```
    #[inline]
    pub fn error_log(&self) -> ErrorLog<'_> {
        let template = match &self.origin {
            Origin::Message(text) => Cow::Borrowed(text.as_str()),
            Origin::Coded(code) => match resolver::installed_resolver() {
                Some(resolver) => Cow::Owned(resolve_template(resolver.as_ref(), *code).into_owned()),
                None => Cow::Borrowed(code.identifier()),
            },
        };

        ErrorLog::new(
            self.code(),
            template,
            self.arguments(),
            self.cause.as_deref().map(|c| c as &(dyn Error + 'static)),
        )
    }

    /// Callback form of [`error_log`](Self::error_log).
    #[inline]
    pub fn with_error_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_>) -> R,
    {
        let log = self.error_log();
        f(&log)
    }
}

impl Zeroize for ConsoleError {
    /// Clear owned argument and message text. The code and cause are kept.
    fn zeroize(&mut self) {
        if let Some(arguments) = self.arguments.as_mut() {
            for argument in arguments.iter_mut() {
                argument.zeroize();
            }
        }
        if let Origin::Message(text) = &mut self.origin {
            text.zeroize();
        }
    }
}

impl Drop for ConsoleError {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleError")
            .field("code", &self.code())
            .field("arguments", &self.arguments.as_ref().map(|a| a.len()))
            .field("cause", &self.cause.as_ref().map(|_| "<PRESENT>"))
            .finish()
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }
}
