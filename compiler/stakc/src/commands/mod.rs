//! Command handlers for the stak CLI.
//!
//! Handlers take loaded [`Source`] text and return either their output or
//! the [`Diagnostic`] describing why they failed; `main` decides what is
//! printed where and which exit code results. [`report`] renders a
//! diagnostic against the source it came from.

use std::io::Write;

use stak_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use stak_diagnostic::Diagnostic;

use crate::Source;

mod check;
mod dump;
mod explain;
mod run;

pub use check::check_source;
pub use dump::dump_source;
pub use explain::explain_code;
pub use run::run_source;

/// Render `diagnostic` with a snippet of `source`.
pub fn report<W: Write>(
    diagnostic: &Diagnostic,
    source: &Source,
    color: ColorMode,
    is_tty: bool,
    writer: W,
) -> W {
    let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty)
        .with_source(source.text.as_str())
        .with_file_path(source.name.as_str());
    emitter.emit(diagnostic);
    emitter.flush();
    emitter.into_inner()
}

/// Format a final stack, bottom first: `[4, 2, 3, 1]`.
pub fn format_stack(values: &[f64]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&value.to_string());
    }
    out.push(']');
    out
}
