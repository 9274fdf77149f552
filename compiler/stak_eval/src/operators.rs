//! Binary and unary operator implementations.
//!
//! The operator set is closed, so dispatch is a plain `match`. Results
//! follow the operand convention `op(second, top)`; comparisons and `not`
//! produce `1.0` or `0.0`.

use stak_ir::Operation;

use crate::errors::{division_by_zero, EvalErrorKind};

/// Operations that combine the two top stack values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinaryOp {
    /// The binary operator an operation denotes, if any.
    pub fn from_operation(operation: Operation) -> Option<BinaryOp> {
        Some(match operation {
            Operation::Add => BinaryOp::Add,
            Operation::Sub => BinaryOp::Sub,
            Operation::Mul => BinaryOp::Mul,
            Operation::Div => BinaryOp::Div,
            Operation::Pow => BinaryOp::Pow,
            Operation::Eq => BinaryOp::Eq,
            Operation::Lt => BinaryOp::Lt,
            Operation::Gt => BinaryOp::Gt,
            Operation::Le => BinaryOp::Le,
            Operation::Ge => BinaryOp::Ge,
            Operation::Push
            | Operation::Pop
            | Operation::Dup
            | Operation::Swap
            | Operation::Not
            | Operation::Jump
            | Operation::To
            | Operation::Nop => return None,
        })
    }
}

#[inline]
fn truth(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Apply `op` with `left` one below the top and `right` on top.
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64, EvalErrorKind> {
    Ok(match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            if right == 0.0 {
                return Err(division_by_zero());
            }
            left / right
        }
        BinaryOp::Pow => {
            // Zero has no finite negative power.
            if left == 0.0 && right < 0.0 && right.is_finite() {
                return Err(division_by_zero());
            }
            left.powf(right)
        }
        BinaryOp::Eq => truth(left == right),
        BinaryOp::Lt => truth(left < right),
        BinaryOp::Gt => truth(left > right),
        BinaryOp::Le => truth(left <= right),
        BinaryOp::Ge => truth(left >= right),
    })
}

/// Logical negation: `1.0` for zero, `0.0` otherwise.
#[inline]
pub fn evaluate_not(value: f64) -> f64 {
    truth(value == 0.0)
}
