//! The `check` command: compile without running.

use stak_diagnostic::Diagnostic;

use crate::Source;

/// Compile `source`, returning the number of instructions produced.
pub fn check_source(source: &Source) -> Result<usize, Diagnostic> {
    stak_parse::compile(&source.text)
        .map(|program| program.len())
        .map_err(|err| err.to_diagnostic())
}
