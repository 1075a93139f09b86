//! Process-wide resolver registry.
//!
//! The registry is global state, so everything runs in one test to keep the
//! sequence deterministic.

use console_errors::{
    clear_resolver, install_resolver, install_shared, installed_resolver, Catalog, ConsoleError,
    ErrorCode, TemplateResolver,
};
use std::borrow::Cow;
use std::sync::Arc;
use std::thread;

struct Shouting;

impl TemplateResolver for Shouting {
    fn template(&self, code: ErrorCode) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(format!("{}!!! {{0}}", code.identifier())))
    }
}

#[test]
fn registry_lifecycle() {
    let err = ConsoleError::from_parts(ErrorCode::NotFound, None, ["wlan0"]);
    let internal = ConsoleError::internal_error("disk full");
    let literal = ConsoleError::from_message("Device rebooting");

    // Nothing installed: raw identifiers.
    assert!(installed_resolver().is_none());
    assert_eq!(err.message(), "NOT_FOUND");
    assert_eq!(err.to_string(), "NOT_FOUND");

    // Bundled catalog.
    assert!(install_resolver(Catalog::english()).is_none());
    assert_eq!(err.message(), "\"wlan0\" was not found.");
    assert_eq!(err.localized_message(), "\"wlan0\" was not found.");
    assert_eq!(err.to_string(), "\"wlan0\" was not found.");
    assert_eq!(internal.message(), "disk full");
    assert_eq!(literal.message(), "Device rebooting");

    // Log lines carry the template, never the substituted arguments.
    let credential = ConsoleError::from_parts(ErrorCode::InvalidValue, None, ["password", "hunter2"]);
    let line = credential.error_log().to_string();
    assert_eq!(
        line,
        "[INVALID_VALUE] category='Validation' \
         message='Value \"{1}\" is not valid for field \"{0}\".' args=2"
    );
    let token = ConsoleError::internal_error("token=hunter2");
    let line = token.error_log().to_string();
    assert_eq!(
        line,
        "[INTERNAL_ERROR] category='Internal' \
         message='An internal error occurred. {0}' args=1"
    );

    // Visible from other threads.
    let from_thread = thread::spawn(|| {
        ConsoleError::from_parts(ErrorCode::ServiceNotEnabled, None, ["DHCP"]).message()
    })
    .join()
    .unwrap();
    assert_eq!(from_thread, "The DHCP service is not enabled.");

    // Replacing returns the previous resolver.
    let previous = install_shared(Arc::new(Shouting)).expect("catalog was installed");
    assert_eq!(
        previous.template(ErrorCode::NotFound).as_deref(),
        Some("\"{0}\" was not found.")
    );
    assert_eq!(err.message(), "NOT_FOUND!!! wlan0");

    // Explicit resolvers bypass the registry.
    assert_eq!(err.message_with(&Catalog::new()), "NOT_FOUND");

    // Clearing restores the identifier fallback.
    assert!(clear_resolver().is_some());
    assert!(clear_resolver().is_none());
    assert_eq!(err.message(), "NOT_FOUND");
}
