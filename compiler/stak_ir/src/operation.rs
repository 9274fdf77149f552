//! Operation kinds and their argument signatures.
//!
//! The operation set is closed, so both the type checker and the evaluator
//! match on `Operation` exhaustively instead of dispatching on names.

use std::fmt;

/// Primitive kind of an instruction argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArgKind {
    /// A finite float equal to its own truncation (`3`, `-1`, `2.0`).
    Int,
    /// Any float, including non-finite values.
    Float,
}

impl ArgKind {
    /// Whether `value` is admissible for this kind.
    #[inline]
    pub fn admits(self, value: f64) -> bool {
        match self {
            ArgKind::Int => value.is_finite() && value.trunc() == value,
            ArgKind::Float => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArgKind::Int => "int",
            ArgKind::Float => "float",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accepted argument shape: ordered argument kinds.
pub type Signature = &'static [ArgKind];

const NONE: Signature = &[];
const INT: Signature = &[ArgKind::Int];
const FLOAT: Signature = &[ArgKind::Float];

/// Every operation of the language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operation {
    Push,
    Pop,
    Dup,
    Swap,

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

    Not,

    /// Relative jump.
    Jump,
    /// Absolute jump.
    To,

    Nop,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 18] = [
        Operation::Push,
        Operation::Pop,
        Operation::Dup,
        Operation::Swap,
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Pow,
        Operation::Eq,
        Operation::Lt,
        Operation::Gt,
        Operation::Le,
        Operation::Ge,
        Operation::Not,
        Operation::Jump,
        Operation::To,
        Operation::Nop,
    ];

    /// Canonical source spelling.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Push => "push",
            Operation::Pop => "pop",
            Operation::Dup => "dup",
            Operation::Swap => "swap",
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Pow => "pow",
            Operation::Eq => "eq",
            Operation::Lt => "lt",
            Operation::Gt => "gt",
            Operation::Le => "le",
            Operation::Ge => "ge",
            Operation::Not => "not",
            Operation::Jump => "jump",
            Operation::To => "to",
            Operation::Nop => "nop",
        }
    }

    /// Look up an operation by its canonical name.
    pub fn from_name(name: &str) -> Option<Operation> {
        Some(match name {
            "push" => Operation::Push,
            "pop" => Operation::Pop,
            "dup" => Operation::Dup,
            "swap" => Operation::Swap,
            "add" => Operation::Add,
            "sub" => Operation::Sub,
            "mul" => Operation::Mul,
            "div" => Operation::Div,
            "pow" => Operation::Pow,
            "eq" => Operation::Eq,
            "lt" => Operation::Lt,
            "gt" => Operation::Gt,
            "le" => Operation::Le,
            "ge" => Operation::Ge,
            "not" => Operation::Not,
            "jump" => Operation::Jump,
            "to" => Operation::To,
            "nop" => Operation::Nop,
            _ => return None,
        })
    }

    /// Accepted argument shapes. An instruction is well-typed when its
    /// arguments match exactly one of these in count and per-position kind.
    pub fn signatures(self) -> &'static [Signature] {
        match self {
            Operation::Push => &[FLOAT],

            Operation::Pop => &[NONE],

            Operation::Dup | Operation::Swap | Operation::Jump | Operation::To => &[NONE, INT],

            Operation::Add | Operation::Sub | Operation::Mul | Operation::Div | Operation::Pow => {
                &[NONE]
            }

            Operation::Eq | Operation::Lt | Operation::Gt | Operation::Le | Operation::Ge => {
                &[NONE]
            }

            Operation::Not => &[NONE],

            Operation::Nop => &[NONE],
        }
    }

    /// Whether a label reference may appear on this operation.
    #[inline]
    pub fn accepts_label(self) -> bool {
        matches!(self, Operation::Jump | Operation::To)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
