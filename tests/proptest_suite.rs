//! Property-based tests for console_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use console_errors::{
    format_fixed_point, format_message, resolve_template, Catalog, ConsoleError, ErrorCode,
    IdentifierResolver, TemplateResolver, DEFAULT_MAX_PASSES,
};
use proptest::prelude::*;

fn non_internal_code() -> impl Strategy<Value = ErrorCode> {
    prop::sample::select(ErrorCode::ALL).prop_filter("not the escape hatch", |c| {
        !c.is_internal_error()
    })
}

fn any_code() -> impl Strategy<Value = ErrorCode> {
    prop::sample::select(ErrorCode::ALL)
}

// ============================================================================
// FORMATTER PROPERTIES
// ============================================================================

proptest! {
    /// Absent argument list returns the template byte-for-byte
    #[test]
    fn absent_arguments_return_template(template in "\\PC*") {
        prop_assert_eq!(format_message::<String>(&template, None), template);
    }

    /// Strings without placeholders are fixed points of formatting
    #[test]
    fn no_placeholders_unchanged(
        template in "[^{}]*",
        args in prop::collection::vec("\\PC*", 0..6),
    ) {
        prop_assert_eq!(format_message(&template, Some(&args[..])), template);
    }

    /// Formatting never panics on arbitrary input
    #[test]
    fn formatting_never_panics(
        template in "[{}0-9a-z ]{0,64}",
        args in prop::collection::vec("[{}0-9a-z]{0,8}", 0..12),
    ) {
        let _ = format_message(&template, Some(&args[..]));
    }

    /// Argument text is copied, never rescanned
    #[test]
    fn argument_text_is_not_rescanned(arg in "\\PC*") {
        let args = [arg.clone()];
        prop_assert_eq!(format_message("{0}", Some(&args[..])), arg);
    }

    /// Both policies agree when arguments cannot form new placeholders
    #[test]
    fn policies_agree_on_plain_arguments(
        template in "[{}0-9a-z ]{0,40}",
        args in prop::collection::vec("[a-z]{1,8}", 0..5),
    ) {
        let single = format_message(&template, Some(&args[..]));
        let fixed = format_fixed_point(&template, Some(&args[..]), DEFAULT_MAX_PASSES);
        prop_assert_eq!(fixed, Ok(single));
    }
}

// ============================================================================
// ERROR VALUE PROPERTIES
// ============================================================================

proptest! {
    /// Non-internal codes render the resolved template with their arguments
    #[test]
    fn message_is_formatted_template(
        code in non_internal_code(),
        args in prop::option::of(prop::collection::vec("\\PC{0,16}", 0..4)),
    ) {
        let err = match &args {
            Some(args) => ConsoleError::from_parts(code, None, args.iter().cloned()),
            None => ConsoleError::new(code),
        };

        let catalog = Catalog::english();
        let resolvers: [&dyn TemplateResolver; 2] = [&catalog, &IdentifierResolver];
        for resolver in resolvers {
            let expected = format_message(
                &resolve_template(resolver, code),
                args.as_deref(),
            );
            prop_assert_eq!(err.message_with(resolver), expected);
        }
    }

    /// Internal error with exactly one argument renders it verbatim
    #[test]
    fn internal_error_single_argument_verbatim(text in "\\PC*") {
        let err = ConsoleError::from_parts(ErrorCode::InternalError, None, [text.clone()]);
        prop_assert_eq!(err.message_with(&Catalog::english()), text.clone());
        prop_assert_eq!(err.message_with(&IdentifierResolver), text);
    }

    /// Literal-message errors ignore every resolver
    #[test]
    fn literal_message_verbatim(text in "\\PC*") {
        let err = ConsoleError::from_message(text.clone());
        prop_assert_eq!(err.code(), None);
        prop_assert_eq!(err.message_with(&Catalog::english()), text);
    }

    /// Arguments are stored in insertion order, unchanged
    #[test]
    fn arguments_round_trip(
        code in any_code(),
        args in prop::collection::vec("\\PC{0,32}", 0..8),
    ) {
        let err = ConsoleError::from_parts(code, None, args.clone());
        prop_assert_eq!(err.arguments(), Some(&args[..]));
    }

    /// Structured log output is bounded regardless of argument size
    #[test]
    fn log_line_is_bounded(text in "\\PC{0,5000}") {
        let err = ConsoleError::internal_error(text);
        let mut line = String::new();
        err.error_log().write_to(&mut line).unwrap();
        prop_assert!(line.len() < 4096);
    }
}

// ============================================================================
// CATALOG PROPERTIES
// ============================================================================

proptest! {
    /// Unknown keys are reported with their line number
    #[test]
    fn unknown_keys_rejected(key in "[a-z]{1,12}", blank_lines in 0usize..5) {
        let source = format!("{}{}=x", "\n".repeat(blank_lines), key);
        let err = Catalog::from_properties(&source).unwrap_err();
        prop_assert_eq!(err.line(), blank_lines + 1);
    }
}
