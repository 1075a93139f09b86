//! Error code taxonomy for the management console.
//!
//! Every failure the console reports to its user is identified by one value of
//! the closed [`ErrorCode`] enumeration. A code carries:
//!
//! - a stable raw identifier (`INTERNAL_ERROR`, `NOT_FOUND`, ...) which is the
//!   key used by message bundles and the fallback display text
//! - a [`CodeCategory`] used to group failures in logs and dashboards
//!
//! # Governance
//!
//! Codes are declared once, through the `declare_error_codes!` table below.
//! The table generates the enum, the identifier lookup, the category lookup
//! and [`ErrorCode::ALL`], so adding a code is a one-line change that cannot
//! leave the lookups out of sync.
//!
//! # Example
//!
//! ```rust
//! use console_errors::{CodeCategory, ErrorCode};
//!
//! let code: ErrorCode = "NOT_FOUND".parse().unwrap();
//! assert_eq!(code, ErrorCode::NotFound);
//! assert_eq!(code.category(), CodeCategory::Resource);
//! assert_eq!(code.to_string(), "NOT_FOUND");
//! ```

use std::fmt;
use std::str::FromStr;

// ============================================================================
// Code Category
// ============================================================================

/// Broad grouping of error codes.
///
/// Categories are metadata only: they never influence how a message is
/// derived, they only help presentation and log pipelines group failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeCategory {
    /// Unexpected failures inside the console or the device behind it.
    Internal,
    /// Rejected user input or malformed values.
    Validation,
    /// Transport and remote call failures.
    Connectivity,
    /// Authentication, authorization and certificate handling.
    Security,
    /// Services that are disabled, missing or in the wrong state.
    Service,
    /// Lookup, download and package management of resources.
    Resource,
    /// Non-fatal notices surfaced through the error channel.
    Notice,
}

impl CodeCategory {
    /// Human-readable category name. Zero allocation.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Internal => "Internal",
            Self::Validation => "Validation",
            Self::Connectivity => "Connectivity",
            Self::Security => "Security",
            Self::Service => "Service",
            Self::Resource => "Resource",
            Self::Notice => "Notice",
        }
    }
}

impl fmt::Display for CodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Error Code Table
// ============================================================================

macro_rules! declare_error_codes {
    ($( $(#[$doc:meta])* $variant:ident => ($identifier:literal, $category:ident) ),+ $(,)?) => {
        /// Closed enumeration of console error kinds.
        ///
        /// `Display` writes the raw identifier, which is also the key used by
        /// message bundles.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ErrorCode {
            $( $(#[$doc])* $variant, )+
        }

        impl ErrorCode {
            /// Every code, in declaration order.
            pub const ALL: &'static [ErrorCode] = &[ $( ErrorCode::$variant, )+ ];

            /// Raw identifier of this code (`"INTERNAL_ERROR"`, ...).
            #[inline]
            pub const fn identifier(self) -> &'static str {
                match self {
                    $( ErrorCode::$variant => $identifier, )+
                }
            }

            /// Category this code belongs to.
            #[inline]
            pub const fn category(self) -> CodeCategory {
                match self {
                    $( ErrorCode::$variant => CodeCategory::$category, )+
                }
            }
        }
    };
}

declare_error_codes! {
    /// Unexpected failure. With exactly one argument, that argument is the
    /// message verbatim.
    InternalError => ("INTERNAL_ERROR", Internal),
    /// An argument had an illegal value.
    IllegalArgument => ("ILLEGAL_ARGUMENT", Validation),
    /// A required argument was missing.
    IllegalNullArgument => ("ILLEGAL_NULL_ARGUMENT", Validation),
    /// An entry with the same name already exists.
    DuplicateName => ("DUPLICATE_NAME", Validation),
    /// A field failed validation.
    InvalidValue => ("INVALID_VALUE", Validation),
    /// The console could not reach the device or a remote endpoint.
    ConnectionFailure => ("CONNECTION_FAILURE", Connectivity),
    /// A remote call did not answer in time.
    RequestTimeout => ("REQUEST_TIMEOUT", Connectivity),
    /// The console session expired.
    SessionExpired => ("SESSION_EXPIRED", Security),
    /// The caller may not perform the requested operation.
    IllegalAccess => ("ILLEGAL_ACCESS", Security),
    /// Login was rejected.
    InvalidUsernamePassword => ("INVALID_USERNAME_PASSWORD", Security),
    /// The current password supplied for a password change did not match.
    PasswordMismatch => ("PASSWORD_MISMATCH", Security),
    /// A certificate or key could not be parsed.
    CertificateParseFailure => ("CERTIFICATE_PARSE_FAILURE", Security),
    /// The object is not in a state that allows the operation.
    IllegalState => ("ILLEGAL_STATE", Service),
    /// The backing service is disabled.
    ServiceNotEnabled => ("SERVICE_NOT_ENABLED", Service),
    /// The operation is not supported on this device.
    OperationNotSupported => ("OPERATION_NOT_SUPPORTED", Service),
    /// Applying configuration to a component failed.
    ConfigurationFailure => ("CONFIGURATION_FAILURE", Service),
    /// The requested entity does not exist.
    NotFound => ("NOT_FOUND", Resource),
    /// Downloading or reading a remote resource failed.
    ResourceFetchingFailure => ("RESOURCE_FETCHING_FAILURE", Resource),
    /// Installing a package failed.
    PackageInstallFailure => ("PACKAGE_INSTALL_FAILURE", Resource),
    /// Removing a package failed.
    PackageUninstallFailure => ("PACKAGE_UNINSTALL_FAILURE", Resource),
    /// Non-fatal warning.
    Warning => ("WARNING", Notice),
}

impl ErrorCode {
    /// Look up a code by its raw identifier.
    ///
    /// Matching is exact and case-sensitive, mirroring bundle keys.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCodeError`] if no code has this identifier.
    pub fn from_identifier(identifier: &str) -> Result<Self, UnknownCodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.identifier() == identifier)
            .ok_or_else(|| UnknownCodeError {
                identifier: identifier.to_owned(),
            })
    }

    /// Whether this is the internal-error escape hatch.
    #[inline]
    pub const fn is_internal_error(self) -> bool {
        matches!(self, Self::InternalError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for ErrorCode {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s)
    }
}

/// Returned when an identifier does not name any [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCodeError {
    identifier: String,
}

impl UnknownCodeError {
    /// The identifier that failed to resolve.
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for UnknownCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown error code identifier '{}'", self.identifier)
    }
}

impl std::error::Error for UnknownCodeError {}

// ============================================================================
// Tests
// ============================================================================
