//! Type-checked instructions.

use std::fmt;

use smallvec::SmallVec;

use crate::{Operation, Prefixes, Signature};

/// Instruction argument list. Every current signature has at most one
/// argument, so the list never spills to the heap.
pub type Arguments = SmallVec<[f64; 1]>;

/// Arguments did not match any signature of the operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error(
    "arguments for `{operation}` must be one of {}, were [{}]",
    signature_list(.operation.signatures()),
    comma_list(.found)
)]
pub struct SignatureMismatch {
    pub operation: Operation,
    pub found: Arguments,
}

/// `[], [int]` style rendering of every accepted shape.
fn signature_list(signatures: &[Signature]) -> String {
    signatures
        .iter()
        .map(|&signature| format!("[{}]", comma_list(signature)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn comma_list<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One compiled instruction.
///
/// Equality is structural over operation, arguments and prefixes.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    operation: Operation,
    arguments: Arguments,
    prefixes: Prefixes,
}

impl Instruction {
    /// Build an instruction, checking `arguments` against the operation's
    /// signatures.
    pub fn new(
        operation: Operation,
        arguments: impl IntoIterator<Item = f64>,
        prefixes: Prefixes,
    ) -> Result<Self, SignatureMismatch> {
        let arguments: Arguments = arguments.into_iter().collect();
        if !matches_any_signature(operation, &arguments) {
            return Err(SignatureMismatch {
                operation,
                found: arguments,
            });
        }
        Ok(Instruction {
            operation,
            arguments,
            prefixes,
        })
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub fn arguments(&self) -> &[f64] {
        &self.arguments
    }

    /// The literal argument, if the instruction has one.
    #[inline]
    pub fn argument(&self) -> Option<f64> {
        self.arguments.first().copied()
    }

    #[inline]
    pub fn prefixes(&self) -> Prefixes {
        self.prefixes
    }
}

fn matches_any_signature(operation: Operation, arguments: &[f64]) -> bool {
    operation.signatures().iter().any(|signature| {
        signature.len() == arguments.len()
            && signature
                .iter()
                .zip(arguments)
                .all(|(kind, value)| kind.admits(*value))
    })
}

impl fmt::Display for Instruction {
    /// Canonical source form: `prefixes operation arguments`.
    ///
    /// Floats use Rust's shortest round-trip formatting, so compiling the
    /// rendered text yields an equal instruction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.prefixes.is_empty() {
            write!(f, "{} ", self.prefixes)?;
        }
        f.write_str(self.operation.name())?;
        for value in &self.arguments {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}
