//! The `explain` command: display documentation for error codes.

use kind_diagnostic::{ErrorCode, ErrorDocs};

/// Print the documentation for `code_str`. Returns `false` if there is none.
pub fn explain_error(code_str: &str) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX (errors) or WXXXX (warnings) where X is a digit.");
        eprintln!("Examples: E1001, E2002, W1001");
        return false;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
        true
    } else {
        eprintln!("No documentation available for {code}");
        false
    }
}
