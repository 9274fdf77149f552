//! The operand stack.
//!
//! All reads are bounds-checked and report [`EvalErrorKind::StackUnderflow`]
//! with the depth the operation needed.

use crate::errors::{negative_count, stack_underflow, EvalErrorKind};

/// Numeric operand stack, owned by one interpreter run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    pub fn new() -> Self {
        Stack::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<f64, EvalErrorKind> {
        self.values.pop().ok_or_else(|| stack_underflow(1, 0))
    }

    /// Return the top value without removing it.
    pub fn peek(&self) -> Result<f64, EvalErrorKind> {
        self.values.last().copied().ok_or_else(|| stack_underflow(1, 0))
    }

    /// Top value, popped unless `quiet`.
    pub fn take(&mut self, quiet: bool) -> Result<f64, EvalErrorKind> {
        if quiet {
            self.peek()
        } else {
            self.pop()
        }
    }

    /// The two top values as `(second, top)`, popped unless `quiet`.
    pub fn take_pair(&mut self, quiet: bool) -> Result<(f64, f64), EvalErrorKind> {
        let len = self.values.len();
        if len < 2 {
            return Err(stack_underflow(2, len));
        }
        let pair = (self.values[len - 2], self.values[len - 1]);
        if !quiet {
            self.values.truncate(len - 2);
        }
        Ok(pair)
    }

    /// Append copies of the top `depth` values, keeping their order.
    pub fn dup(&mut self, depth: i64) -> Result<(), EvalErrorKind> {
        let len = self.values.len();
        let depth = usize::try_from(depth).map_err(|_| negative_count(depth))?;
        if depth > len {
            return Err(stack_underflow(depth, len));
        }
        self.values.extend_from_within(len - depth..);
        Ok(())
    }

    /// Exchange the top value with the one `gap` positions below it.
    pub fn swap(&mut self, gap: i64) -> Result<(), EvalErrorKind> {
        let len = self.values.len();
        let gap = usize::try_from(gap).map_err(|_| negative_count(gap))?;
        if gap >= len {
            return Err(stack_underflow(gap.saturating_add(1), len));
        }
        let top = len - 1;
        self.values.swap(top, top - gap);
        Ok(())
    }

    /// Values bottom to top.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for Stack {
    fn from(values: Vec<f64>) -> Self {
        Stack { values }
    }
}
