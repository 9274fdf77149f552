//! Stak IR - the compiled representation of stak programs.
//!
//! This crate contains the data structures shared by every phase:
//! - `Span` for source locations
//! - `Operation` and its accepted argument signatures
//! - `Prefix` / `Prefixes` modifier flag set
//! - `Instruction`, the only unit the evaluator ever sees
//! - `Program`, an immutable instruction sequence with per-instruction spans
//!
//! # Invariants
//!
//! An `Instruction` can only be constructed through `Instruction::new`, which
//! type-checks the arguments against the operation's signatures. There is no
//! way to build an instruction for an unknown operation or with a bad
//! argument list.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod instruction;
mod operation;
mod prefix;
mod program;
mod span;

pub use instruction::{Arguments, Instruction, SignatureMismatch};
pub use operation::{ArgKind, Operation, Signature};
pub use prefix::{Gate, Prefix, PrefixError, Prefixes};
pub use program::Program;
pub use span::Span;
