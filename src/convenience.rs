//! Convenience macros for building console errors.
//!
//! # Usage
//!
//! ```rust
//! use console_errors::{console_err, internal_err, ErrorCode};
//!
//! let port = 8443;
//! let err = console_err!(ErrorCode::InvalidValue, "port", port);
//! assert_eq!(err.arguments().unwrap(), ["port", "8443"]);
//!
//! let err = internal_err!("snapshot {} is corrupt", 7);
//! assert_eq!(err.message(), "snapshot 7 is corrupt");
//! ```
//!
//! Arguments are converted with their `Display` implementation at the call
//! site, so the error never holds references into caller data.

/// Create a [`ConsoleError`](crate::ConsoleError) from a code, an optional
/// cause and `Display` arguments.
///
/// # Forms
///
/// - `console_err!(code)`: code only, arguments absent
/// - `console_err!(code, a, b, ...)`: code with arguments
/// - `console_err!(code, cause = e)`: code with a cause
/// - `console_err!(code, cause = e; a, b, ...)`: code, cause and arguments
///
/// # Example
///
/// ```rust
/// # use console_errors::{console_err, ErrorCode};
/// use std::io;
///
/// let err = console_err!(
///     ErrorCode::ResourceFetchingFailure,
///     cause = io::Error::from(io::ErrorKind::TimedOut);
///     "https://repo.example/pkg.dp"
/// );
/// assert_eq!(err.arguments().map(<[String]>::len), Some(1));
/// ```
#[macro_export]
macro_rules! console_err {
    ($code:expr $(,)?) => {
        $crate::ConsoleError::new($code)
    };
    ($code:expr, cause = $cause:expr; $($arg:expr),+ $(,)?) => {
        $crate::ConsoleError::from_parts(
            $code,
            ::std::option::Option::Some(::std::convert::Into::into($cause)),
            [$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
    ($code:expr, cause = $cause:expr $(,)?) => {
        $crate::ConsoleError::from_cause($code, $cause)
    };
    ($code:expr, $($arg:expr),+ $(,)?) => {
        $crate::ConsoleError::from_parts(
            $code,
            ::std::option::Option::None,
            [$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
}

/// Create an `INTERNAL_ERROR` whose message is the formatted text.
///
/// Accepts the same arguments as [`format!`].
///
/// ```rust
/// # use console_errors::{internal_err, ErrorCode};
/// let err = internal_err!("unexpected reply {:?}", "NAK");
/// assert_eq!(err.code(), Some(ErrorCode::InternalError));
/// assert_eq!(err.message(), "unexpected reply \"NAK\"");
/// ```
#[macro_export]
macro_rules! internal_err {
    ($($fmt:tt)+) => {
        $crate::ConsoleError::internal_error(::std::format!($($fmt)+))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{Catalog, ConsoleError, ErrorCode};
    use std::error::Error;
    use std::io;

    #[test]
    fn code_only_form() {
        let err = console_err!(ErrorCode::SessionExpired);
        assert_eq!(err.code(), Some(ErrorCode::SessionExpired));
        assert!(err.arguments().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn arguments_use_display() {
        let err = console_err!(ErrorCode::InvalidValue, "mtu", 1500u16);
        assert_eq!(err.arguments().unwrap(), ["mtu", "1500"]);
        assert_eq!(
            err.message_with(&Catalog::english()),
            "Value \"1500\" is not valid for field \"mtu\"."
        );
    }

    #[test]
    fn cause_form() {
        let err = console_err!(
            ErrorCode::ConnectionFailure,
            cause = io::Error::from(io::ErrorKind::ConnectionReset)
        );
        assert!(err.arguments().is_none());
        assert!(err.source().is_some());
    }

    #[test]
    fn cause_and_arguments_form() {
        let err = console_err!(
            ErrorCode::PackageInstallFailure,
            cause = io::Error::from(io::ErrorKind::PermissionDenied);
            "org.example.bundle",
        );
        assert_eq!(err.arguments().unwrap(), ["org.example.bundle"]);
        assert!(err.source().is_some());
    }

    #[test]
    fn internal_err_formats_message() {
        let id = 42;
        let err: ConsoleError = internal_err!("worker {id} stalled");
        assert_eq!(err.code(), Some(ErrorCode::InternalError));
        assert_eq!(err.message_with(&Catalog::english()), "worker 42 stalled");
    }
}
