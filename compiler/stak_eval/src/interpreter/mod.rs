//! The execution loop.
//!
//! Each step fetches the instruction at the program counter and advances
//! the counter before doing anything else, so relative jumps are measured
//! from the next instruction. Gating prefixes are resolved before the
//! operation runs; a `qcond` gating value is lifted off the stack for the
//! duration of the instruction and pushed back afterwards.

mod builder;

pub use builder::InterpreterBuilder;

use stak_ir::{Gate, Instruction, Operation, Program};

use crate::errors::{
    address_out_of_range, step_limit_exceeded, type_mismatch, EvalError, EvalErrorKind,
};
use crate::operators::{evaluate_binary, evaluate_not, BinaryOp};
use crate::Stack;

/// Runs one program against a fresh stack.
pub struct Interpreter<'p> {
    program: &'p Program,
    stack: Stack,
    pc: usize,
    steps: u64,
    max_steps: Option<u64>,
}

impl<'p> Interpreter<'p> {
    /// Interpreter with no step limit.
    pub fn new(program: &'p Program) -> Self {
        InterpreterBuilder::new(program).build()
    }

    /// Index of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Instructions executed so far, skipped ones included.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Whether the program counter has run off the end.
    pub fn is_finished(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Run to completion and return the final stack, bottom to top.
    #[tracing::instrument(level = "debug", skip_all, fields(instructions = self.program.len()))]
    pub fn run(mut self) -> Result<Vec<f64>, EvalError> {
        while !self.is_finished() {
            self.step()?;
        }
        tracing::debug!(steps = self.steps, depth = self.stack.len(), "finished");
        Ok(self.stack.into_vec())
    }

    /// Execute the instruction at the program counter.
    pub fn step(&mut self) -> Result<(), EvalError> {
        let program = self.program;
        let index = self.pc;
        let Some(instruction) = program.get(index) else {
            return Ok(());
        };
        self.pc += 1;

        if let Some(limit) = self.max_steps {
            if self.steps >= limit {
                return Err(EvalError::new(step_limit_exceeded(limit), index));
            }
        }
        self.steps += 1;

        tracing::trace!(index, %instruction, stack = ?self.stack.as_slice(), "step");
        self.execute(instruction)
            .map_err(|kind| EvalError::new(kind, index))
    }

    fn execute(&mut self, instruction: &Instruction) -> Result<(), EvalErrorKind> {
        let restore = match instruction.prefixes().gate() {
            Gate::None => None,
            Gate::Cond => {
                if self.stack.pop()? == 0.0 {
                    return Ok(());
                }
                None
            }
            Gate::QCond => {
                if self.stack.peek()? == 0.0 {
                    return Ok(());
                }
                Some(self.stack.pop()?)
            }
        };

        self.apply(instruction)?;

        if let Some(value) = restore {
            self.stack.push(value);
        }
        Ok(())
    }

    /// The operation's own stack and counter effect.
    fn apply(&mut self, instruction: &Instruction) -> Result<(), EvalErrorKind> {
        let quiet = instruction.prefixes().is_quiet();
        let operation = instruction.operation();

        match operation {
            Operation::Push => {
                // Signature checking guarantees the literal.
                if let Some(value) = instruction.argument() {
                    self.stack.push(value);
                }
            }
            Operation::Pop => {
                self.stack.pop()?;
            }
            Operation::Dup => self.stack.dup(count(instruction))?,
            Operation::Swap => self.stack.swap(count(instruction))?,
            Operation::Add
            | Operation::Sub
            | Operation::Mul
            | Operation::Div
            | Operation::Pow
            | Operation::Eq
            | Operation::Lt
            | Operation::Gt
            | Operation::Le
            | Operation::Ge => {
                if let Some(op) = BinaryOp::from_operation(operation) {
                    let (left, right) = self.stack.take_pair(quiet)?;
                    self.stack.push(evaluate_binary(op, left, right)?);
                }
            }
            Operation::Not => {
                let value = self.stack.take(quiet)?;
                self.stack.push(evaluate_not(value));
            }
            Operation::Jump => {
                let distance = self.operand(instruction, quiet)?;
                if !distance.is_finite() {
                    return Err(type_mismatch(distance));
                }
                #[allow(clippy::cast_possible_truncation)]
                let distance = distance.trunc() as i64;
                let target = i64::try_from(self.pc)
                    .unwrap_or(i64::MAX)
                    .saturating_add(distance)
                    .saturating_sub(1);
                self.pc = self.checked_target(target, |t, len| t >= 0 && t <= len)?;
            }
            Operation::To => {
                let address = self.operand(instruction, quiet)?;
                if !(address.is_finite() && address.trunc() == address) {
                    return Err(type_mismatch(address));
                }
                #[allow(clippy::cast_possible_truncation)]
                let target = address as i64;
                // Address 0 is rejected, unlike a relative jump landing there.
                self.pc = self.checked_target(target, |t, len| t > 0 && t < len)?;
            }
            Operation::Nop => {}
        }
        Ok(())
    }

    /// Jump operand: the literal if present, else the stack top (popped
    /// unless `quiet`).
    fn operand(&mut self, instruction: &Instruction, quiet: bool) -> Result<f64, EvalErrorKind> {
        match instruction.argument() {
            Some(value) => Ok(value),
            None => self.stack.take(quiet),
        }
    }

    fn checked_target(
        &self,
        target: i64,
        in_range: impl Fn(i64, i64) -> bool,
    ) -> Result<usize, EvalErrorKind> {
        let len = self.program.len();
        let len_i64 = i64::try_from(len).unwrap_or(i64::MAX);
        if !in_range(target, len_i64) {
            return Err(address_out_of_range(target, len));
        }
        usize::try_from(target).map_err(|_| address_out_of_range(target, len))
    }
}

/// `dup`/`swap` count, defaulting to 1.
#[allow(clippy::cast_possible_truncation)]
fn count(instruction: &Instruction) -> i64 {
    instruction.argument().map_or(1, |n| n as i64)
}
