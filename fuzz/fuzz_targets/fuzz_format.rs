#![no_main]

use console_errors::{format_fixed_point, format_message, ConsoleError, ErrorCode};
use libfuzzer_sys::fuzz_target;

// Input layout: NUL-separated segments. The first is the template, the rest
// are arguments. The first byte picks the code.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let mut segments = text.split('\0');
    let template = segments.next().unwrap_or_default();
    let args: Vec<&str> = segments.collect();

    let single = format_message(template, Some(&args[..]));

    // Output grows by at most one argument per placeholder.
    let longest = args.iter().map(|a| a.len()).max().unwrap_or(0);
    assert!(single.len() <= template.len() + template.matches('{').count() * longest);

    let _ = format_fixed_point(template, Some(&args[..]), 8);

    let code = ErrorCode::ALL[selector as usize % ErrorCode::ALL.len()];
    let err = ConsoleError::from_parts(code, None, args.iter().copied());
    let _ = err.message();
    let mut line = String::new();
    let _ = err.error_log().write_to(&mut line);
});
