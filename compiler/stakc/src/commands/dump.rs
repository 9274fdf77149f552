//! The `dump` command: print the compiled program.
//!
//! Labels are gone by this point, so label jumps show up as `to <index>`.
//! The output compiles back to the same program.

use stak_diagnostic::Diagnostic;

use crate::Source;

/// Compile `source` and render it one canonical instruction per line.
pub fn dump_source(source: &Source) -> Result<String, Diagnostic> {
    stak_parse::compile(&source.text)
        .map(|program| program.to_string())
        .map_err(|err| err.to_diagnostic())
}
