//! Centralized error constructors for the evaluator.
//!
//! Operations report failures as an [`EvalErrorKind`]; the interpreter
//! attaches the index of the failing instruction to build an [`EvalError`].

use stak_diagnostic::{Diagnostic, ErrorCode};
use stak_ir::Program;

/// Runtime failure categories.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("stack underflow: needed {needed} value(s), stack holds {available}")]
    StackUnderflow { needed: usize, available: usize },

    #[error("element count must not be negative, got {count}")]
    NegativeCount { count: i64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("jump operand must be a finite integer, got {value}")]
    TypeMismatch { value: f64 },

    #[error("jump target {target} is out of range for a program of {len} instruction(s)")]
    AddressOutOfRange { target: i64, len: usize },

    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },
}

impl EvalErrorKind {
    /// Get the error code for this kind.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::StackUnderflow { .. } | EvalErrorKind::NegativeCount { .. } => {
                ErrorCode::E6001
            }
            EvalErrorKind::DivisionByZero => ErrorCode::E6002,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::AddressOutOfRange { .. } => ErrorCode::E6004,
            EvalErrorKind::StepLimitExceeded { .. } => ErrorCode::E6005,
        }
    }

    fn label_text(&self) -> &'static str {
        match self {
            EvalErrorKind::StackUnderflow { .. } => "not enough values on the stack",
            EvalErrorKind::NegativeCount { .. } => "count is below zero",
            EvalErrorKind::DivisionByZero => "divides by zero",
            EvalErrorKind::TypeMismatch { .. } => "unusable jump operand",
            EvalErrorKind::AddressOutOfRange { .. } => "jump lands outside the program",
            EvalErrorKind::StepLimitExceeded { .. } => "still running here",
        }
    }
}

/// A runtime error and the instruction that raised it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("runtime error at instruction {index}: {kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// 0-based index of the failing instruction.
    pub index: usize,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, index: usize) -> Self {
        EvalError { kind, index }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a diagnostic, pointing at the failing instruction's
    /// statement when `program` knows where it came from.
    pub fn to_diagnostic(&self, program: &Program) -> Diagnostic {
        let mut diag = Diagnostic::new(self.code(), self.kind.to_string());
        match program.span(self.index) {
            Some(span) if !span.is_dummy() => {
                diag = diag.with_label(span, self.kind.label_text());
            }
            _ => {}
        }
        if let Some(instruction) = program.get(self.index) {
            diag = diag.with_note(format!(
                "while executing `{instruction}` (instruction {})",
                self.index
            ));
        }
        if let EvalErrorKind::AddressOutOfRange { len, .. } = self.kind {
            diag = diag.with_note(format!(
                "relative jumps may land on 0..={len}; absolute addresses must lie strictly between 0 and {len}"
            ));
        }
        diag
    }
}

// Stack Errors

/// Fewer values on the stack than an operation reads.
#[cold]
pub fn stack_underflow(needed: usize, available: usize) -> EvalErrorKind {
    EvalErrorKind::StackUnderflow { needed, available }
}

/// `dup` or `swap` given a count below zero.
#[cold]
pub fn negative_count(count: i64) -> EvalErrorKind {
    EvalErrorKind::NegativeCount { count }
}

// Arithmetic Errors

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalErrorKind {
    EvalErrorKind::DivisionByZero
}

// Control Flow Errors

/// Absolute jump address that is not an integer.
#[cold]
pub fn type_mismatch(value: f64) -> EvalErrorKind {
    EvalErrorKind::TypeMismatch { value }
}

/// Jump target outside the permitted range.
#[cold]
pub fn address_out_of_range(target: i64, len: usize) -> EvalErrorKind {
    EvalErrorKind::AddressOutOfRange { target, len }
}

/// Configured step limit reached before termination.
#[cold]
pub fn step_limit_exceeded(limit: u64) -> EvalErrorKind {
    EvalErrorKind::StepLimitExceeded { limit }
}
