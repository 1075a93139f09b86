//! Code-to-template resolution.
//!
//! Message templates live outside the error value. A [`TemplateResolver`]
//! supplies the template for a code; when it has none, the code's raw
//! identifier is the template.
//!
//! Resolvers reach an error in one of two ways:
//!
//! - explicitly, through [`ConsoleError::message_with`](crate::ConsoleError::message_with)
//! - process-wide, through [`install_resolver`], consulted by
//!   [`ConsoleError::message`](crate::ConsoleError::message)
//!
//! With nothing installed, messages fall back to raw identifiers.

use crate::ErrorCode;
use std::borrow::Cow;
use std::sync::{Arc, PoisonError, RwLock};

/// Capability mapping an error code to its display template.
pub trait TemplateResolver: Send + Sync {
    /// Template for `code`, or `None` to fall back to the raw identifier.
    fn template(&self, code: ErrorCode) -> Option<Cow<'_, str>>;
}

/// Resolver that knows no templates. Every message is the raw identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierResolver;

impl TemplateResolver for IdentifierResolver {
    #[inline]
    fn template(&self, _code: ErrorCode) -> Option<Cow<'_, str>> {
        None
    }
}

impl<R: TemplateResolver + ?Sized> TemplateResolver for &R {
    #[inline]
    fn template(&self, code: ErrorCode) -> Option<Cow<'_, str>> {
        (**self).template(code)
    }
}

impl<R: TemplateResolver + ?Sized> TemplateResolver for Box<R> {
    #[inline]
    fn template(&self, code: ErrorCode) -> Option<Cow<'_, str>> {
        (**self).template(code)
    }
}

impl<R: TemplateResolver + ?Sized> TemplateResolver for Arc<R> {
    #[inline]
    fn template(&self, code: ErrorCode) -> Option<Cow<'_, str>> {
        (**self).template(code)
    }
}

/// Template for `code` from `resolver`, falling back to the raw identifier.
#[inline]
pub fn resolve_template(resolver: &dyn TemplateResolver, code: ErrorCode) -> Cow<'_, str> {
    resolver
        .template(code)
        .unwrap_or(Cow::Borrowed(code.identifier()))
}

// ============================================================================
// Process-wide Registry
// ============================================================================

/// Shared handle to an installed resolver.
pub type SharedResolver = Arc<dyn TemplateResolver>;

static INSTALLED: RwLock<Option<SharedResolver>> = RwLock::new(None);

// The slot only ever holds a complete Arc, so a poisoned lock is still valid.

/// Install `resolver` for the whole process, returning the one it replaces.
pub fn install_resolver<R: TemplateResolver + 'static>(resolver: R) -> Option<SharedResolver> {
    install_shared(Arc::new(resolver))
}

/// Install an already shared resolver, returning the one it replaces.
pub fn install_shared(resolver: SharedResolver) -> Option<SharedResolver> {
    INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(resolver)
}

/// Remove the installed resolver, returning it.
pub fn clear_resolver() -> Option<SharedResolver> {
    INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// Currently installed resolver, if any.
///
/// The lock is released before this returns; callers format without holding it.
pub fn installed_resolver() -> Option<SharedResolver> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
