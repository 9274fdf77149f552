//! Stack-machine evaluator for stak.
//!
//! [`execute`] runs a compiled [`Program`] against a fresh operand stack
//! and returns the final stack, bottom to top. Runtime failures abort the
//! run; no partial stack is returned.
//!
//! [`InterpreterBuilder`] exposes the knobs `execute` leaves at their
//! defaults, such as a step limit for programs that may loop forever.

pub mod errors;
mod interpreter;
mod operators;
mod stack;

use stak_ir::Program;

pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_not, BinaryOp};
pub use stack::Stack;

/// Run `program` to completion.
pub fn execute(program: &Program) -> Result<Vec<f64>, EvalError> {
    Interpreter::new(program).run()
}
