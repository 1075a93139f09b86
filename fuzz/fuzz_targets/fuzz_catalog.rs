#![no_main]

use console_errors::{Catalog, ConsoleError, ErrorCode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    match Catalog::from_properties(source) {
        Ok(catalog) => {
            for &code in ErrorCode::ALL {
                let err = ConsoleError::from_parts(code, None, ["a", "b"]);
                let _ = err.message_with(&catalog);
            }
        }
        Err(err) => assert!(err.line() >= 1),
    }
});
