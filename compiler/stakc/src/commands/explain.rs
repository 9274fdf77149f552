//! The `explain` command: describe an error code.

use stak_diagnostic::ErrorCode;

/// Explanation text for `code`, or `None` if no such code exists.
///
/// Codes are matched case-insensitively.
pub fn explain_code(code: &str) -> Option<String> {
    let code = ErrorCode::from_code(code.trim())?;
    let phase = if code.is_eval_error() {
        "runtime"
    } else {
        "compile-time"
    };
    Some(format!("{code} ({phase}): {}", code.description()))
}
