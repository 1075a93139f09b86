//! Message catalogs: the concrete code-to-template tables.
//!
//! [`Catalog::english`] bundles a template for every [`ErrorCode`].
//! Deployments with their own wording load a `KEY=template` bundle with
//! [`Catalog::from_properties`]:
//!
//! ```rust
//! use console_errors::{Catalog, ConsoleError, ErrorCode};
//!
//! let catalog = Catalog::from_properties(
//!     "# overrides\nNOT_FOUND=Nothing called {0} here\n",
//! ).unwrap();
//!
//! let err = ConsoleError::from_parts(ErrorCode::NotFound, None, ["wlan0"]);
//! assert_eq!(err.message_with(&catalog), "Nothing called wlan0 here");
//! ```
//!
//! # Bundle Format
//!
//! - one `KEY=template` entry per line, split at the first `=`
//! - blank lines and lines starting with `#` or `!` are comments
//! - keys are trimmed and must be known identifiers
//! - leading whitespace of the template is dropped, the rest is kept verbatim
//! - a key may appear once
//!
//! Escapes and line continuations are not interpreted.

use crate::{ErrorCode, TemplateResolver};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Bundled English templates. Covers every code; checked in `tests`.
const ENGLISH: &[(ErrorCode, &str)] = &[
    (ErrorCode::InternalError, "An internal error occurred. {0}"),
    (ErrorCode::IllegalArgument, "Illegal value for argument \"{0}\"."),
    (ErrorCode::IllegalNullArgument, "Value for argument \"{0}\" is required."),
    (ErrorCode::DuplicateName, "An entry named \"{0}\" already exists."),
    (ErrorCode::InvalidValue, "Value \"{1}\" is not valid for field \"{0}\"."),
    (ErrorCode::ConnectionFailure, "Connection to {0} failed."),
    (ErrorCode::RequestTimeout, "The request to {0} timed out."),
    (ErrorCode::SessionExpired, "Your session has expired. Please log in again."),
    (ErrorCode::IllegalAccess, "You are not allowed to perform this operation."),
    (ErrorCode::InvalidUsernamePassword, "Invalid username or password."),
    (ErrorCode::PasswordMismatch, "The current password does not match."),
    (ErrorCode::CertificateParseFailure, "The certificate could not be parsed. {0}"),
    (ErrorCode::IllegalState, "Operation not allowed in the current state. {0}"),
    (ErrorCode::ServiceNotEnabled, "The {0} service is not enabled."),
    (ErrorCode::OperationNotSupported, "Operation \"{0}\" is not supported."),
    (ErrorCode::ConfigurationFailure, "Configuration of {0} could not be applied."),
    (ErrorCode::NotFound, "\"{0}\" was not found."),
    (ErrorCode::ResourceFetchingFailure, "Failed to fetch resource {0}."),
    (ErrorCode::PackageInstallFailure, "Installation of package {0} failed."),
    (ErrorCode::PackageUninstallFailure, "Removal of package {0} failed."),
    (ErrorCode::Warning, "{0}"),
];

/// Code-to-template table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    templates: BTreeMap<ErrorCode, Cow<'static, str>>,
}

impl Catalog {
    /// Empty catalog; every code resolves to its identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled English templates.
    pub fn english() -> Self {
        Self {
            templates: ENGLISH
                .iter()
                .map(|&(code, template)| (code, Cow::Borrowed(template)))
                .collect(),
        }
    }

    /// Parse a `KEY=template` bundle.
    ///
    /// # Errors
    ///
    /// [`CatalogError`] with the 1-based line number of the first bad entry.
    pub fn from_properties(source: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let entry = raw.trim_start();
            if entry.is_empty() || entry.starts_with('#') || entry.starts_with('!') {
                continue;
            }

            let (key, template) = entry
                .split_once('=')
                .ok_or(CatalogError::MissingSeparator { line })?;
            let key = key.trim();

            let code = ErrorCode::from_identifier(key).map_err(|_| CatalogError::UnknownKey {
                line,
                key: key.to_owned(),
            })?;
            if catalog.templates.contains_key(&code) {
                return Err(CatalogError::DuplicateKey {
                    line,
                    key: code.identifier(),
                });
            }

            catalog
                .templates
                .insert(code, Cow::Owned(template.trim_start().to_owned()));
        }

        Ok(catalog)
    }

    /// Set the template for `code`, returning the previous one.
    pub fn insert(
        &mut self,
        code: ErrorCode,
        template: impl Into<Cow<'static, str>>,
    ) -> Option<Cow<'static, str>> {
        self.templates.insert(code, template.into())
    }

    /// Template for `code`, if this catalog has one.
    pub fn get(&self, code: ErrorCode) -> Option<&str> {
        self.templates.get(&code).map(|t| t.as_ref())
    }

    /// Number of codes with a template.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateResolver for Catalog {
    fn template(&self, code: ErrorCode) -> Option<Cow<'_, str>> {
        self.get(code).map(Cow::Borrowed)
    }
}

/// Failure to parse a message bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Entry line without `=`.
    MissingSeparator {
        /// 1-based line number.
        line: usize,
    },
    /// Key is not an error code identifier.
    UnknownKey {
        /// 1-based line number.
        line: usize,
        /// The unrecognized key.
        key: String,
    },
    /// Key already defined earlier in the bundle.
    DuplicateKey {
        /// 1-based line number of the repeat.
        line: usize,
        /// The repeated identifier.
        key: &'static str,
    },
}

impl CatalogError {
    /// 1-based line number of the offending entry.
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingSeparator { line }
            | Self::UnknownKey { line, .. }
            | Self::DuplicateKey { line, .. } => *line,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { line } => {
                write!(f, "Line {}: expected KEY=template", line)
            }
            Self::UnknownKey { line, key } => {
                write!(f, "Line {}: unknown error code '{}'", line, key)
            }
            Self::DuplicateKey { line, key } => {
                write!(f, "Line {}: duplicate key '{}'", line, key)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Tests
// ============================================================================
