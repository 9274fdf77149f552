//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use stak_ir::Program;

use super::Interpreter;
use crate::Stack;

/// Builder for [`Interpreter`].
///
/// By default the interpreter starts with an empty stack and no step
/// limit, which is what [`crate::execute`] uses.
pub struct InterpreterBuilder<'p> {
    program: &'p Program,
    max_steps: Option<u64>,
    stack: Stack,
}

impl<'p> InterpreterBuilder<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            max_steps: None,
            stack: Stack::new(),
        }
    }

    /// Fail with a step-limit error once this many instructions have run.
    ///
    /// `None` removes the limit.
    #[must_use]
    pub fn max_steps(mut self, limit: Option<u64>) -> Self {
        self.max_steps = limit;
        self
    }

    /// Start from these values instead of an empty stack.
    #[must_use]
    pub fn initial_stack(mut self, values: Vec<f64>) -> Self {
        self.stack = Stack::from(values);
        self
    }

    pub fn build(self) -> Interpreter<'p> {
        Interpreter {
            program: self.program,
            stack: self.stack,
            pc: 0,
            steps: 0,
            max_steps: self.max_steps,
        }
    }
}
