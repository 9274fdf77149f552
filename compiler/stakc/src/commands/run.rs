//! The `run` command: compile and execute a program.

use stak_diagnostic::Diagnostic;
use stak_eval::InterpreterBuilder;

use crate::Source;

/// Compile `source` and run it, returning the final stack.
///
/// `max_steps` of `None` or `Some(0)` runs without a step limit.
pub fn run_source(source: &Source, max_steps: Option<u64>) -> Result<Vec<f64>, Diagnostic> {
    let program = stak_parse::compile(&source.text).map_err(|err| err.to_diagnostic())?;
    tracing::debug!(instructions = program.len(), ?max_steps, "running");

    InterpreterBuilder::new(&program)
        .max_steps(max_steps.filter(|&limit| limit > 0))
        .build()
        .run()
        .map_err(|err| err.to_diagnostic(&program))
}
